//! Rotation and evenly spaced point sets on a circle
//!
//! Coordinates are truncated toward zero after rotation, not rounded. The
//! design's slight asymmetry comes from this truncation, so it must stay.

use crate::types::Point;

/// Rotate `point` about `center` by `angle` radians (counter-clockwise in a
/// y-up frame, clockwise on screen).
pub fn rotate(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = f64::from(point.x - center.x);
    let dy = f64::from(point.y - center.y);
    let xr = cos * dx - sin * dy + f64::from(center.x);
    let yr = sin * dx + cos * dy + f64::from(center.y);
    Point::new(xr as i32, yr as i32)
}

/// `n` points evenly spaced on a circle of `radius` around `center`
///
/// Point `i` is `center + (radius, 0)` rotated by `i * 360/n + offset_degrees`.
/// A negative radius mirrors the set through the centre.
pub fn symmetric_points(
    radius: i32,
    n: usize,
    center: Point,
    offset_degrees: f64,
) -> SymmetricPoints {
    let step = if n == 0 {
        0.0
    } else {
        (360.0 / n as f64).to_radians()
    };
    SymmetricPoints {
        start: center.offset(radius, 0),
        center,
        step,
        offset: offset_degrees.to_radians(),
        index: 0,
        count: n,
    }
}

/// Iterator returned by [`symmetric_points`]
#[derive(Debug, Clone)]
pub struct SymmetricPoints {
    start: Point,
    center: Point,
    step: f64,
    offset: f64,
    index: usize,
    count: usize,
}

impl Iterator for SymmetricPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }
        // Each point is one rotation of the start point; angles are not accumulated.
        let angle = self.index as f64 * self.step + self.offset;
        self.index += 1;
        Some(rotate(self.start, self.center, angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SymmetricPoints {}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_4, PI};

    use super::*;

    fn distance(a: Point, b: Point) -> f64 {
        let dx = f64::from(a.x - b.x);
        let dy = f64::from(a.y - b.y);
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn test_rotate_about_self_is_identity() {
        let p = Point::new(123, -45);
        for angle in [0.0, 0.5, 1.0, PI, -2.75, 100.0] {
            assert_eq!(rotate(p, p, angle), p);
        }
    }

    #[test]
    fn test_rotate_truncates_toward_zero() {
        let origin = Point::new(0, 0);

        // 45 degrees puts (10, 0) at (7.07.., 7.07..)
        let p = rotate(Point::new(10, 0), origin, FRAC_PI_4);
        assert_eq!(p, Point::new(7, 7));

        // Negative coordinates truncate toward zero, not down
        let p = rotate(Point::new(10, 0), origin, 3.0 * FRAC_PI_4);
        assert_eq!(p, Point::new(-7, 7));
    }

    #[test]
    fn test_symmetric_points_count_and_distance() {
        let center = Point::new(400, 400);
        for n in [1, 2, 3, 6, 7, 24, 100] {
            for r in [16, 150, 300] {
                let points: Vec<_> = symmetric_points(r, n, center, 0.0).collect();
                assert_eq!(points.len(), n);
                for p in points {
                    let d = distance(p, center);
                    assert!((d - f64::from(r)).abs() <= 1.5, "r={r} n={n} d={d}");
                }
            }
        }
    }

    #[test]
    fn test_symmetric_points_spacing() {
        let center = Point::new(0, 0);
        let points: Vec<_> = symmetric_points(1000, 4, center, 0.0).collect();
        assert_eq!(
            points,
            vec![
                Point::new(1000, 0),
                Point::new(0, 1000),
                Point::new(-1000, 0),
                Point::new(0, -1000),
            ]
        );
    }

    #[test]
    fn test_reference_start_point() {
        let center = Point::new(400, 400);
        let points: Vec<_> = symmetric_points(300, 24, center, 0.0).collect();
        assert_eq!(points[0], Point::new(700, 400));
        assert!(points.contains(&Point::new(700, 400)));
    }

    #[test]
    fn test_offset_rotates_start_point() {
        let center = Point::new(0, 0);
        let mut points = symmetric_points(100, 6, center, 90.0);
        assert_eq!(points.next(), Some(Point::new(0, 100)));
    }

    #[test]
    fn test_negative_radius_mirrors() {
        let center = Point::new(50, 50);
        let pos: Vec<_> = symmetric_points(20, 4, center, 0.0).collect();
        let neg: Vec<_> = symmetric_points(-20, 4, center, 0.0).collect();
        assert_eq!(neg[0], Point::new(30, 50));
        assert_eq!(neg[0], pos[2]);
    }

    #[test]
    fn test_exact_size() {
        let origin = Point::new(0, 0);
        let mut points = symmetric_points(10, 5, origin, 0.0);
        assert_eq!(points.len(), 5);
        points.next();
        assert_eq!(points.len(), 4);
        assert_eq!(symmetric_points(10, 0, origin, 0.0).count(), 0);
    }
}
