//! Stroke and fill primitives on a [`Canvas`]
//!
//! Outlines are 8-connected and fills are 4-connected, so every outline
//! drawn here is a closed barrier for [`Canvas::flood_fill`].

use tracing::debug;

use crate::surface::Canvas;
use crate::types::{Color, Point, Thickness};

impl Canvas {
    /// Draw a circle around `center`
    ///
    /// `Thickness::Outline` plots a one-pixel midpoint circle,
    /// `Thickness::Filled` paints every pixel within `radius` of the centre.
    /// A negative radius draws nothing.
    pub fn stroke_circle(
        &mut self,
        center: Point,
        radius: i32,
        color: Color,
        thickness: Thickness,
    ) {
        if radius < 0 {
            debug!("stroke_circle: negative radius {}, skipped", radius);
            return;
        }
        match thickness {
            Thickness::Outline => self.circle_outline(center, radius, color),
            Thickness::Filled => self.disk(center, radius, color),
        }
    }

    fn circle_outline(&mut self, center: Point, radius: i32, color: Color) {
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while x >= y {
            for (dx, dy) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.set_pixel(center.x + dx, center.y + dy, color);
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn disk(&mut self, center: Point, radius: i32, color: Color) {
        let r2 = i64::from(radius) * i64::from(radius);
        // Clip the scan to the surface
        let min_y = (center.y - radius).max(0);
        let max_y = (center.y + radius).min(self.height() as i32 - 1);
        let min_x = (center.x - radius).max(0);
        let max_x = (center.x + radius).min(self.width() as i32 - 1);

        for y in min_y..=max_y {
            let dy = i64::from(y - center.y);
            for x in min_x..=max_x {
                let dx = i64::from(x - center.x);
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw an 8-connected line segment from `from` to `to`, both ends included
    pub fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);

        loop {
            self.set_pixel(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Replace the 4-connected region of pixels matching the seed's color
    ///
    /// Returns the number of pixels recolored. A seed outside the surface,
    /// or one that already has `color`, changes nothing and returns 0.
    pub fn flood_fill(&mut self, seed: Point, color: Color) -> usize {
        let Some(seed_index) = self.index_of(seed.x, seed.y) else {
            return 0;
        };

        let width = self.width() as usize;
        let height = self.height() as usize;
        let pixels = self.pixels_mut();
        let target = pixels[seed_index];
        if target == color {
            return 0;
        }

        // Recoloring doubles as the visited marker since target != color
        let mut stack: Vec<usize> = Vec::with_capacity(4096);
        pixels[seed_index] = color;
        stack.push(seed_index);
        let mut filled = 1;

        while let Some(index) = stack.pop() {
            let x = index % width;
            let y = index / width;

            let mut visit = |neighbor: usize| {
                if pixels[neighbor] == target {
                    pixels[neighbor] = color;
                    stack.push(neighbor);
                    filled += 1;
                }
            };

            if x > 0 {
                visit(index - 1);
            }
            if x + 1 < width {
                visit(index + 1);
            }
            if y > 0 {
                visit(index - width);
            }
            if y + 1 < height {
                visit(index + width);
            }
        }

        filled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);

    fn count(canvas: &Canvas, color: Color) -> usize {
        canvas.pixels().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn test_outline_is_symmetric() {
        let mut canvas = Canvas::blank(41);
        let center = Point::new(20, 20);
        canvas.stroke_circle(center, 15, Color::INK, Thickness::Outline);

        assert_eq!(canvas.get_pixel(35, 20), Some(Color::INK));
        assert_eq!(canvas.get_pixel(5, 20), Some(Color::INK));
        assert_eq!(canvas.get_pixel(20, 35), Some(Color::INK));
        assert_eq!(canvas.get_pixel(20, 5), Some(Color::INK));
        assert_eq!(canvas.get_pixel(20, 20), Some(Color::BLANK));

        for y in 0..41 {
            for x in 0..41 {
                let mirrored = canvas.get_pixel(40 - x, y);
                assert_eq!(canvas.get_pixel(x, y), mirrored);
            }
        }
    }

    #[test]
    fn test_outline_blocks_fill() {
        let mut canvas = Canvas::blank(64);
        let center = Point::new(32, 32);
        canvas.stroke_circle(center, 20, Color::INK, Thickness::Outline);

        let inside = canvas.flood_fill(center, RED);
        assert!(inside > 0);
        // Corners stay untouched
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::BLANK));
        assert_eq!(canvas.get_pixel(63, 63), Some(Color::BLANK));

        // Approximate area of the interior disk
        let area = std::f64::consts::PI * 19.0 * 19.0;
        assert!((inside as f64 - area).abs() < area * 0.15, "{inside}");
    }

    #[test]
    fn test_zero_radius_plots_center() {
        let mut canvas = Canvas::blank(5);
        canvas.stroke_circle(Point::new(2, 2), 0, Color::INK, Thickness::Outline);
        assert_eq!(count(&canvas, Color::INK), 1);
        assert_eq!(canvas.get_pixel(2, 2), Some(Color::INK));
    }

    #[test]
    fn test_negative_radius_draws_nothing() {
        let mut canvas = Canvas::blank(5);
        canvas.stroke_circle(Point::new(2, 2), -3, Color::INK, Thickness::Filled);
        assert_eq!(count(&canvas, Color::INK), 0);
    }

    #[test]
    fn test_filled_disk() {
        let mut canvas = Canvas::blank(21);
        canvas.stroke_circle(Point::new(10, 10), 3, GREEN, Thickness::Filled);
        assert_eq!(canvas.get_pixel(10, 10), Some(GREEN));
        assert_eq!(canvas.get_pixel(13, 10), Some(GREEN));
        assert_eq!(canvas.get_pixel(14, 10), Some(Color::BLANK));
        // (2, 2) offset: 8 <= 9
        assert_eq!(canvas.get_pixel(12, 12), Some(GREEN));
        // (3, 3) offset: 18 > 9
        assert_eq!(canvas.get_pixel(13, 13), Some(Color::BLANK));
        assert_eq!(count(&canvas, GREEN), 29);
    }

    #[test]
    fn test_disk_clips_to_surface() {
        let mut canvas = Canvas::blank(10);
        canvas.stroke_circle(Point::new(0, 0), 100, GREEN, Thickness::Filled);
        assert_eq!(count(&canvas, GREEN), 100);
    }

    #[test]
    fn test_line_endpoints_and_connectivity() {
        let mut canvas = Canvas::blank(20);
        let from = Point::new(2, 3);
        let to = Point::new(17, 11);
        canvas.stroke_line(from, to, Color::INK);

        assert_eq!(canvas.get(from), Some(Color::INK));
        assert_eq!(canvas.get(to), Some(Color::INK));
        // One pixel per column for a shallow line
        assert_eq!(count(&canvas, Color::INK), 16);
    }

    #[test]
    fn test_line_reversed_matches_extent() {
        let mut forward = Canvas::blank(20);
        let mut backward = Canvas::blank(20);
        forward.stroke_line(Point::new(1, 1), Point::new(18, 5), Color::INK);
        backward.stroke_line(Point::new(18, 5), Point::new(1, 1), Color::INK);
        assert_eq!(count(&forward, Color::INK), count(&backward, Color::INK));
    }

    #[test]
    fn test_line_splits_regions() {
        let mut canvas = Canvas::blank(16);
        canvas.stroke_line(Point::new(0, 15), Point::new(15, 0), Color::INK);
        canvas.flood_fill(Point::new(0, 0), RED);
        assert_eq!(canvas.get_pixel(15, 15), Some(Color::BLANK));
        assert_eq!(canvas.get_pixel(1, 1), Some(RED));
    }

    #[test]
    fn test_flood_fill_out_of_bounds_is_noop() {
        let mut canvas = Canvas::blank(8);
        assert_eq!(canvas.flood_fill(Point::new(-1, 3), RED), 0);
        assert_eq!(canvas.flood_fill(Point::new(3, 8), RED), 0);
        assert_eq!(count(&canvas, RED), 0);
    }

    #[test]
    fn test_flood_fill_same_color_is_noop() {
        let mut canvas = Canvas::blank(8);
        assert_eq!(canvas.flood_fill(Point::new(3, 3), Color::BLANK), 0);
    }

    #[test]
    fn test_flood_fill_whole_canvas() {
        let mut canvas = Canvas::blank(8);
        assert_eq!(canvas.flood_fill(Point::new(3, 3), RED), 64);
        assert_eq!(count(&canvas, RED), 64);
    }

    #[test]
    fn test_flood_fill_is_four_connected() {
        let mut canvas = Canvas::blank(3);
        // Diagonal barrier leaves (0,0) only diagonally connected to (1,1)
        canvas.set_pixel(1, 0, Color::INK);
        canvas.set_pixel(0, 1, Color::INK);
        assert_eq!(canvas.flood_fill(Point::new(0, 0), RED), 1);
        assert_eq!(canvas.get_pixel(1, 1), Some(Color::BLANK));
    }
}
