//! Merging the outer and inner layers
//!
//! Both layers use [`Color::BLANK`] as their transparent background. Because
//! the sentinel has every bit set, a per-pixel AND keeps whichever layer has
//! content at each pixel and stays blank where neither does. Where both
//! layers have content the channels are ANDed, which the design avoids by
//! confining the medallion to the outer layer's blank centre.

use tracing::debug;

use crate::error::PaintingError;
use crate::layer::Layer;
use crate::surface::Canvas;
use crate::types::Color;

/// Combine two pixels with `BLANK` acting as transparent
#[inline]
pub fn combine(lower: Color, upper: Color) -> Color {
    lower & upper
}

/// Inlay `inner` into `outer`
pub fn composite(outer: &Layer, inner: &Layer) -> Result<Canvas, PaintingError> {
    composite_canvases(outer.canvas(), inner.canvas())
}

pub fn composite_canvases(outer: &Canvas, inner: &Canvas) -> Result<Canvas, PaintingError> {
    if !outer.same_size(inner) {
        return Err(PaintingError::SizeMismatch {
            expected_width: outer.width(),
            expected_height: outer.height(),
            width: inner.width(),
            height: inner.height(),
        });
    }

    let mut result = outer.clone();
    let mut overlaps = 0usize;
    for (dst, &src) in result.pixels_mut().iter_mut().zip(inner.pixels()) {
        if !dst.is_blank() && !src.is_blank() {
            overlaps += 1;
        }
        *dst = combine(*dst, src);
    }
    debug!("composite: {} overlapping pixels", overlaps);

    Ok(result)
}
