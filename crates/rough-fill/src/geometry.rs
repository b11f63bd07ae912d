//! Core geometry types for rough-fill.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = print with `{:?}`
//! - `Clone` + `Copy` = small stack values are copied implicitly
//! - `PartialEq` = compare with `==`
//!
//! Both types here are tiny value types, so they are `Copy` and get passed
//! around by value rather than by reference.

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment from `(x1, y1)` to `(x2, y2)`.
///
/// Direction matters when walking along the line (dots are placed from the
/// start toward the end), but not for its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotate around `center` by `angle_rad` (counter-clockwise in a y-up frame).
    #[inline]
    pub fn rotate(&self, center: Point, angle_rad: f64) -> Point {
        let (sin, cos) = angle_rad.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Point::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a line from two points.
    #[inline]
    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Unit vector pointing from the start toward the end.
    ///
    /// Returns `None` for a zero-length line. A vertical line is handled on
    /// its own branch so the x component is exactly zero rather than the
    /// `cos(π/2)` residue a slope-based angle would leave behind.
    pub fn direction(&self) -> Option<Point> {
        let dx = self.x2 - self.x1;
        let dy = self.y2 - self.y1;

        if dx == 0.0 {
            if dy == 0.0 {
                return None;
            }
            return Some(Point::new(0.0, dy.signum()));
        }

        let length = (dx * dx + dy * dy).sqrt();
        Some(Point::new(dx / length, dy / length))
    }

    /// Rotate both endpoints around `center`.
    #[inline]
    pub fn rotate(&self, center: Point, angle_rad: f64) -> Line {
        Line::from_points(
            self.start().rotate(center, angle_rad),
            self.end().rotate(center, angle_rad),
        )
    }
}

/// Bounding box of a point ring as `(min_x, min_y, max_x, max_y)`.
///
/// ## Rust Lesson #6: Option<T>
///
/// There is no `null`: an empty ring has no bounding box, and the caller is
/// forced by the type system to deal with that.
pub fn bounding_box(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
        // Reversing the line does not change its length
        let reversed = Line::new(3.0, 4.0, 0.0, 0.0);
        assert_eq!(reversed.length(), 5.0);
    }

    #[test]
    fn direction_of_horizontal_lines() {
        let right = Line::new(0.0, 2.0, 10.0, 2.0);
        assert_eq!(right.direction(), Some(Point::new(1.0, 0.0)));

        let left = Line::new(10.0, 2.0, 0.0, 2.0);
        assert_eq!(left.direction(), Some(Point::new(-1.0, 0.0)));
    }

    #[test]
    fn direction_of_vertical_lines_is_exact() {
        let down = Line::new(3.0, 0.0, 3.0, 10.0);
        assert_eq!(down.direction(), Some(Point::new(0.0, 1.0)));

        let up = Line::new(3.0, 10.0, 3.0, 0.0);
        assert_eq!(up.direction(), Some(Point::new(0.0, -1.0)));
    }

    #[test]
    fn zero_length_line_has_no_direction() {
        let dot = Line::new(4.0, 4.0, 4.0, 4.0);
        assert_eq!(dot.direction(), None);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = Point::new(1.0, 0.0).rotate(Point::new(0.0, 0.0), FRAC_PI_2);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ring_bbox() {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(0.0, 5.0),
        ];
        assert_eq!(bounding_box(&ring), Some((0.0, 0.0, 10.0, 5.0)));
        assert_eq!(bounding_box(&[]), None);
    }
}
