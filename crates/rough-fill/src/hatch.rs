//! Hachure line generation: parallel scan lines clipped to a shape.
//!
//! Every fill pattern is drawn on top of these lines. The shape is rotated so
//! the hachure direction becomes horizontal, scanned at a fixed gap, and the
//! interior spans are rotated back into place.

use crate::clip::scanline_spans;
use crate::geometry::{Line, Point, bounding_box};
use crate::options::FillOptions;
use crate::render::RenderHelper;

/// Generate hachure lines for a closed polygon ring.
///
/// Lines are spaced `options.effective_gap()` apart at
/// `options.hachure_angle` degrees, with the first scan line half a gap in
/// from the edge of the shape. Each line runs left to right in the rotated
/// frame and lines come back in scan order.
///
/// Rings with fewer than three points, or with non-finite coordinates,
/// produce no lines.
pub fn hachure_lines_for_polygon(points: &[Point], options: &FillOptions) -> Vec<Line> {
    if points.len() < 3 || !points.iter().all(Point::is_finite) {
        return Vec::new();
    }

    let Some((min_x, min_y, max_x, max_y)) = bounding_box(points) else {
        return Vec::new();
    };
    let center = Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

    let gap = options.effective_gap();
    let angle_rad = options.hachure_angle.to_radians();
    // Skipping the round trip keeps axis-aligned input bit-exact
    let rotate = angle_rad != 0.0;

    let ring: Vec<Point> = if rotate {
        points.iter().map(|p| p.rotate(center, -angle_rad)).collect()
    } else {
        points.to_vec()
    };

    let Some((_, scan_min, _, scan_max)) = bounding_box(&ring) else {
        return Vec::new();
    };

    let mut lines = Vec::new();

    // ## Rust Lesson #19: Integer Math
    //
    // Stepping `y += gap` accumulates rounding error over many lines, so the
    // scan position is recomputed from an integer index instead.
    let mut row: u64 = 0;
    loop {
        let y = scan_min + gap * (row as f64 + 0.5);
        if y >= scan_max {
            break;
        }

        for (start, end) in scanline_spans(&ring, y) {
            let line = Line::new(start, y, end, y);
            lines.push(if rotate { line.rotate(center, angle_rad) } else { line });
        }
        row += 1;
    }

    lines
}

/// Generate hachure lines for an ellipse centred on `(cx, cy)`.
///
/// `width` and `height` are diameters. The outline is sampled with the
/// helper's ellipse parameters (so `curve_step_count` controls how coarse it
/// is) and then hatched like any polygon. A zero width or height gives no
/// lines.
pub fn hachure_lines_for_ellipse(
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
    options: &FillOptions,
    helper: &mut dyn RenderHelper,
) -> Vec<Line> {
    let params = helper.ellipse_params(width, height, options);

    let ring: Vec<Point> = (0..params.step_count)
        .map(|k| {
            let angle = k as f64 * params.increment;
            Point::new(cx + params.rx * angle.cos(), cy + params.ry * angle.sin())
        })
        .collect();

    hachure_lines_for_polygon(&ring, options)
}

// ============================================================================
// TESTS
// ============================================================================
