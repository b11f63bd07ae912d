//! Scanline clipping against closed rings.
//!
//! Hachure lines are always clipped in a frame where they are horizontal, so
//! instead of general segment/segment intersection this works one scanline at
//! a time: find where the ring's edges cross `y`, sort the crossings, and pair
//! them up even-odd. Interior spans come out exact for axis-aligned edges,
//! which keeps the dot count on those spans stable.

use crate::geometry::Point;

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================

/// Test if a point is inside a closed ring using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside.
#[inline]
pub fn point_in_polygon(px: f64, py: f64, ring: &[Point]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (a, b) = (ring[i], ring[j]);
        if crosses(a.y, b.y, py) && px < crossing_x(a, b, py) {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Half-open crossing rule: an edge counts when exactly one endpoint lies
/// above `y`. Vertices on the scanline are therefore counted once, and
/// horizontal edges never.
#[inline]
fn crosses(y_a: f64, y_b: f64, y: f64) -> bool {
    (y_a > y) != (y_b > y)
}

/// X coordinate where the edge `a -> b` crosses the horizontal line `y`.
///
/// Only valid when [`crosses`] holds, which guarantees `a.y != b.y`.
#[inline]
fn crossing_x(a: Point, b: Point, y: f64) -> f64 {
    a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y)
}

// ============================================================================
// SCANLINE SPANS
// ============================================================================

/// All x coordinates where the ring boundary crosses the scanline `y`,
/// sorted ascending.
pub fn scanline_crossings(ring: &[Point], y: f64) -> Vec<f64> {
    let n = ring.len();
    if n < 3 {
        return Vec::new();
    }

    let mut xs = Vec::with_capacity(4);
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (ring[j], ring[i]);
        if crosses(a.y, b.y, y) {
            xs.push(crossing_x(a, b, y));
        }
        j = i;
    }

    // total_cmp gives a total order even if a NaN sneaks in
    xs.sort_by(|a, b| a.total_cmp(b));
    xs
}

/// Interior spans `(x_start, x_end)` of the ring along scanline `y`.
///
/// Crossings are paired even-odd, so self-intersecting rings fill the same
/// way the ray-casting test classifies them. Empty spans are dropped.
pub fn scanline_spans(ring: &[Point], y: f64) -> Vec<(f64, f64)> {
    scanline_crossings(ring, y)
        .chunks_exact(2)
        .filter_map(|pair| {
            let (start, end) = (pair[0], pair[1]);
            (end > start).then_some((start, end))
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    /// A "U" shape: two prongs joined at the bottom (y-down).
    fn u_shape() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 7.0),
            Point::new(7.0, 7.0),
            Point::new(7.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn point_inside_square() {
        let sq = square();
        assert!(point_in_polygon(5.0, 5.0, &sq));
        assert!(!point_in_polygon(15.0, 5.0, &sq));
        assert!(!point_in_polygon(-1.0, 5.0, &sq));
    }

    #[test]
    fn square_span_is_exact() {
        let spans = scanline_spans(&square(), 2.5);
        assert_eq!(spans, vec![(0.0, 10.0)]);
    }

    #[test]
    fn scanline_outside_ring_has_no_spans() {
        assert!(scanline_spans(&square(), -1.0).is_empty());
        assert!(scanline_spans(&square(), 10.5).is_empty());
    }

    #[test]
    fn concave_ring_splits_into_two_spans() {
        let spans = scanline_spans(&u_shape(), 3.0);
        assert_eq!(spans, vec![(0.0, 3.0), (7.0, 10.0)]);

        // Below the notch the ring is solid again
        let spans = scanline_spans(&u_shape(), 8.0);
        assert_eq!(spans, vec![(0.0, 10.0)]);
    }

    #[test]
    fn diamond_span_through_vertex_row() {
        let diamond = vec![
            Point::new(5.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 5.0),
        ];
        // Scanline passes exactly through the left and right vertices
        let spans = scanline_spans(&diamond, 5.0);
        assert_eq!(spans.len(), 1);
        assert!((spans[0].0 - 0.0).abs() < 1e-12);
        assert!((spans[0].1 - 10.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_rings_have_no_crossings() {
        let segment = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        assert!(scanline_crossings(&segment, 5.0).is_empty());
        assert!(!point_in_polygon(5.0, 5.0, &segment));
    }
}
