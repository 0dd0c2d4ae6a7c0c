//! Caption text rendering with `ab_glyph`
//!
//! Text is laid out on a single line from a top-left anchor: the baseline
//! sits one ascent below the anchor. Placement only uses the width and height
//! of the inked pixel bounds, so the ink itself is offset from the anchor by
//! the bounds' `min_x`/`min_y` (side bearing and the gap below the ascent).

use std::path::Path;

use ab_glyph::{Font, FontVec, OutlinedGlyph, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use tracing::debug;

use crate::error::CaptionError;

/// Pixel bounds of rendered text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    fn union(self, other: TextBounds) -> TextBounds {
        TextBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Top-left anchor for text of `bounds` size, centred horizontally with its
/// box `margin` px above the bottom edge
pub fn bottom_center(
    image_width: u32,
    image_height: u32,
    bounds: TextBounds,
    margin: u32,
) -> (f32, f32) {
    let x = (image_width as f32 - bounds.width()) / 2.0;
    let y = image_height as f32 - bounds.height() - margin as f32;
    (x, y)
}

/// A loaded font at a fixed pixel size
pub struct Caption {
    font: FontVec,
    scale: PxScale,
}

impl std::fmt::Debug for Caption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Caption")
            .field("scale", &self.scale)
            .finish()
    }
}

impl Caption {
    /// Load a TrueType/OpenType font from disk
    pub fn load(path: &Path, size: f32) -> Result<Self, CaptionError> {
        let data = std::fs::read(path).map_err(|source| CaptionError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| CaptionError::FontParse {
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_font(font, size))
    }

    pub fn from_font(font: FontVec, size: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(size),
        }
    }

    fn layout(&self, text: &str, origin: (f32, f32)) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = origin.1 + scaled.ascent();
        let mut cursor = origin.0;
        let mut previous = None;
        let mut glyphs = Vec::new();

        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                cursor += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(cursor, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
            cursor += scaled.h_advance(id);
            previous = Some(id);
        }

        glyphs
    }

    /// Inked bounds of `text` anchored at the origin
    /// Returns None when no glyph has an outline (empty or whitespace text)
    pub fn measure(&self, text: &str) -> Option<TextBounds> {
        self.layout(text, (0.0, 0.0))
            .iter()
            .map(|glyph| {
                let rect = glyph.px_bounds();
                TextBounds {
                    min_x: rect.min.x,
                    min_y: rect.min.y,
                    max_x: rect.max.x,
                    max_y: rect.max.y,
                }
            })
            .reduce(TextBounds::union)
    }

    /// Draw `text` centred along the bottom edge of `image`
    /// Returns the anchor used, or None when there was nothing to draw
    pub fn draw(
        &self,
        image: &mut RgbImage,
        text: &str,
        ink: Rgb<u8>,
        margin: u32,
    ) -> Option<(f32, f32)> {
        let bounds = self.measure(text)?;
        let anchor = bottom_center(image.width(), image.height(), bounds, margin);
        debug!(
            "Caption::draw: {:.0}x{:.0} text at ({:.1}, {:.1})",
            bounds.width(),
            bounds.height(),
            anchor.0,
            anchor.1
        );

        for glyph in self.layout(text, anchor) {
            let rect = glyph.px_bounds();
            glyph.draw(|gx, gy, coverage| {
                let x = rect.min.x as i64 + i64::from(gx);
                let y = rect.min.y as i64 + i64::from(gy);
                let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                    return;
                };
                if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
                    blend(pixel, ink, coverage);
                }
            });
        }

        Some(anchor)
    }
}

/// Mix `ink` into `pixel` by glyph coverage
fn blend(pixel: &mut Rgb<u8>, ink: Rgb<u8>, coverage: f32) {
    let alpha = coverage.clamp(0.0, 1.0);
    for (dst, src) in pixel.0.iter_mut().zip(ink.0) {
        let mixed = f32::from(*dst) * (1.0 - alpha) + f32::from(src) * alpha;
        *dst = mixed.round() as u8;
    }
}
