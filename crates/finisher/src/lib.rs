//! Output finishing for Pookalam
//!
//! Turns a composited [`Canvas`] into an image file: the caption is overlaid
//! when its font can be loaded, and the result is written as PNG. A missing
//! font only skips the caption; a failed write is an error.

mod caption;
mod error;

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use painting::Canvas;
use pookalam_config::{ENV_FONT, OutputConfig};
use tracing::{info, warn};

pub use caption::{Caption, TextBounds, bottom_center};
pub use error::{CaptionError, FinishError};

/// Copy a canvas into an `image` RGB buffer
pub fn to_image(canvas: &Canvas) -> Result<RgbImage, FinishError> {
    let (width, height) = (canvas.width(), canvas.height());
    RgbImage::from_raw(width, height, canvas.as_bytes().to_vec())
        .ok_or(FinishError::Buffer { width, height })
}

/// Overlay the configured caption, if the font is available
///
/// Returns whether a caption was drawn.
pub fn apply_caption(image: &mut RgbImage, config: &OutputConfig) -> bool {
    let caption = match Caption::load(&config.font_path, config.font_size) {
        Ok(caption) => caption,
        Err(err) => {
            warn!("{}; skipping caption (set {} to override)", err, ENV_FONT);
            return false;
        }
    };

    let ink = Rgb(config.ink);
    caption
        .draw(image, &config.caption, ink, config.bottom_margin)
        .is_some()
}

/// Write `image` as PNG
pub fn save(image: &RgbImage, path: &Path) -> Result<(), FinishError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| FinishError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Caption and persist a finished canvas, returning the written path
pub fn finish(canvas: &Canvas, config: &OutputConfig) -> Result<PathBuf, FinishError> {
    let mut image = to_image(canvas)?;
    let captioned = apply_caption(&mut image, config);
    save(&image, &config.output_path)?;
    info!(
        "Pookalam design saved as {:?} ({}x{}, caption: {})",
        config.output_path,
        image.width(),
        image.height(),
        if captioned { "yes" } else { "no" }
    );
    Ok(config.output_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use painting::{Color, PaletteColor, Point, Thickness};

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::blank(64);
        canvas.stroke_circle(
            Point::new(32, 32),
            10,
            PaletteColor::Orange.color(),
            Thickness::Filled,
        );
        canvas
    }

    fn config_in(dir: &Path) -> OutputConfig {
        let mut config = OutputConfig::default();
        config.output_path = dir.join("out.png");
        config.font_path = dir.join("no-such-font.otf");
        config
    }

    #[test]
    fn test_to_image_preserves_pixels() {
        let canvas = sample_canvas();
        let image = to_image(&canvas).unwrap();
        assert_eq!(image.dimensions(), (64, 64));
        assert_eq!(image.get_pixel(32, 32), &Rgb([255, 120, 0]));
        assert_eq!(image.get_pixel(0, 0), &Rgb(Color::BLANK.to_array()));
    }

    #[test]
    fn test_missing_font_still_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let canvas = sample_canvas();

        let path = finish(&canvas, &config).unwrap();
        assert_eq!(path, dir.path().join("out.png"));

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.as_raw().as_slice(), canvas.as_bytes());
    }

    #[test]
    fn test_missing_font_skips_caption() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut image = to_image(&sample_canvas()).unwrap();
        let before = image.clone();
        assert!(!apply_caption(&mut image, &config));
        assert_eq!(image, before);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing/dir/out.png");
        let config = config_in(dir.path()).with_output_path(target);
        let result = finish(&sample_canvas(), &config);
        assert!(matches!(result, Err(FinishError::Write { .. })));
    }
}
