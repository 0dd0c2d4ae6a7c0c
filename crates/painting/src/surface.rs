//! CPU raster surface - 8-bit RGB storage

use crate::types::{Color, Point};

/// An 8-bit RGB raster owned by exactly one layer at a time
///
/// Pixels are stored row-major. All coordinate-taking methods accept signed
/// coordinates and silently ignore anything outside the surface, since
/// construction geometry routinely runs off the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas filled with a solid color
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![fill; pixel_count],
        }
    }

    /// Create a square canvas filled with the background sentinel
    pub fn blank(size: u32) -> Self {
        Self::new(size, size, Color::BLANK)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub(crate) fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|index| self.pixels[index])
    }

    /// Get a pixel at a point
    #[inline]
    pub fn get(&self, point: Point) -> Option<Color> {
        self.get_pixel(point.x, point.y)
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index_of(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Get raw pixel data as packed RGB8 bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Whether two canvases have identical dimensions
    #[inline]
    pub fn same_size(&self, other: &Canvas) -> bool {
        self.width == other.width && self.height == other.height
    }
}
