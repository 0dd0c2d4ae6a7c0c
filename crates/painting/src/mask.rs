//! Circular boundary masks
//!
//! A mask is [`Color::INK`] inside the design's silhouette and
//! [`Color::BLANK`] on and outside it. OR-ing a mask into a layer therefore
//! whitens everything outside the boundary and leaves the inside untouched.

use tracing::debug;

use crate::error::PaintingError;
use crate::surface::Canvas;
use crate::types::{Color, Point, Thickness};

/// Marks everything outside a circle as background
#[derive(Debug, Clone)]
pub struct BoundaryMask {
    surface: Canvas,
}

impl BoundaryMask {
    /// Build a mask for a `size`x`size` canvas
    ///
    /// The boundary circle is drawn one pixel wide and the exterior is filled
    /// from the top-left corner. The corner must lie outside the circle.
    pub fn build(size: u32, center: Point, radius: i32) -> Self {
        let mut surface = Canvas::new(size, size, Color::INK);
        surface.stroke_circle(center, radius, Color::BLANK, Thickness::Outline);
        let outside = surface.flood_fill(Point::new(0, 0), Color::BLANK);
        debug!(
            "BoundaryMask::build: size={}, center=({}, {}), radius={}, outside={} px",
            size, center.x, center.y, radius, outside
        );
        Self { surface }
    }

    /// Whether the pixel is on or outside the boundary
    /// Out-of-bounds coordinates count as outside
    pub fn is_outside(&self, x: i32, y: i32) -> bool {
        self.surface.get_pixel(x, y).is_none_or(|c| c != Color::INK)
    }

    /// Merge the mask into `canvas` with a per-pixel OR
    pub fn apply_to(&self, canvas: &mut Canvas) -> Result<(), PaintingError> {
        if !canvas.same_size(&self.surface) {
            return Err(PaintingError::SizeMismatch {
                expected_width: self.surface.width(),
                expected_height: self.surface.height(),
                width: canvas.width(),
                height: canvas.height(),
            });
        }
        for (dst, &mask) in canvas.pixels_mut().iter_mut().zip(self.surface.pixels()) {
            *dst = *dst | mask;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_are_outside() {
        let mask = BoundaryMask::build(800, Point::new(400, 400), 324);
        for (x, y) in [(0, 0), (799, 0), (0, 799), (799, 799)] {
            assert!(mask.is_outside(x, y), "corner ({x}, {y})");
        }
        assert!(!mask.is_outside(400, 400));
    }

    #[test]
    fn test_boundary_itself_is_outside() {
        let mask = BoundaryMask::build(100, Point::new(50, 50), 30);
        assert!(mask.is_outside(80, 50));
        assert!(!mask.is_outside(79, 50));
        assert!(mask.is_outside(20, 50));
        assert!(!mask.is_outside(21, 50));
    }

    #[test]
    fn test_apply_clears_outside_only() {
        let size = 64;
        let center = Point::new(32, 32);
        let mask = BoundaryMask::build(size, center, 20);

        let stroke = Color::rgb(12, 34, 56);
        let mut canvas = Canvas::new(size, size, stroke);
        mask.apply_to(&mut canvas).unwrap();

        for y in 0..size as i32 {
            for x in 0..size as i32 {
                let expected = if mask.is_outside(x, y) {
                    Color::BLANK
                } else {
                    stroke
                };
                assert_eq!(canvas.get_pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_apply_rejects_mismatched_size() {
        let mask = BoundaryMask::build(32, Point::new(16, 16), 10);
        let mut canvas = Canvas::blank(16);
        assert!(matches!(
            mask.apply_to(&mut canvas),
            Err(PaintingError::SizeMismatch { .. })
        ));
    }
}
