//! SVG input - extract closed shapes to fill from SVG documents.
//!
//! Uses usvg for complete SVG resolution (CSS, basic shapes, units) then
//! walks the tree and turns every subpath into a closed ring of points.
//!
//! ## Curve Flattening
//!
//! SVG paths contain Bézier curves (cubic and quadratic). Fillers work on
//! point rings, so curves are flattened into line segments with lyon_geom.

use std::fmt;

use log::debug;
use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use usvg::tiny_skia_path::PathSegment;

use crate::geometry::Point;

/// Error type for SVG input.
///
/// ## Rust Lesson #20: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions. Implementing `Display`
/// and `std::error::Error` lets callers box it, print it, or wrap it with
/// context like any other error.
#[derive(Debug)]
pub enum SvgError {
    Parse(String),
    NoShapes,
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SvgError::Parse(msg) => write!(f, "SVG parse error: {}", msg),
            SvgError::NoShapes => write!(f, "No fillable shapes found in SVG"),
        }
    }
}

impl std::error::Error for SvgError {}

/// A closed ring extracted from an SVG element.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// `id` of the element the ring came from, if it had one
    pub id: Option<String>,
    /// Ring vertices; the last point connects back to the first
    pub points: Vec<Point>,
}

/// Tolerance for curve flattening.
/// Lower = more points, smoother curves, slower.
const CURVE_TOLERANCE: f32 = 0.1;

/// Extract all fillable shapes from an SVG document.
///
/// Every subpath with at least three distinct points becomes one [`Shape`];
/// a path with several subpaths yields several shapes sharing its id.
pub fn extract_shapes_from_svg(svg_content: &str) -> Result<Vec<Shape>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| SvgError::Parse(e.to_string()))?;

    let mut shapes = Vec::new();
    extract_from_group(tree.root(), &mut shapes);
    debug!("extracted {} shapes from SVG", shapes.len());

    if shapes.is_empty() {
        Err(SvgError::NoShapes)
    } else {
        Ok(shapes)
    }
}

fn extract_from_group(group: &usvg::Group, shapes: &mut Vec<Shape>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, shapes),
            usvg::Node::Path(path) => path_to_shapes(path, shapes),
            // Text, images, etc. have nothing to fill
            _ => {}
        }
    }
}

/// Split a usvg path into one ring per subpath.
fn path_to_shapes(path: &usvg::Path, shapes: &mut Vec<Shape>) {
    let id = (!path.id().is_empty()).then(|| path.id().to_string());

    let mut ring: Vec<Point> = Vec::new();
    let mut last: Option<(f32, f32)> = None;

    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                finish_ring(std::mem::take(&mut ring), &id, shapes);
                ring.push(Point::new(p.x as f64, p.y as f64));
                last = Some((p.x, p.y));
            }
            PathSegment::LineTo(p) => {
                ring.push(Point::new(p.x as f64, p.y as f64));
                last = Some((p.x, p.y));
            }
            PathSegment::QuadTo(ctrl, p) => {
                if let Some((lx, ly)) = last {
                    let curve = QuadraticBezierSegment {
                        from: point(lx, ly),
                        ctrl: point(ctrl.x, ctrl.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| {
                        ring.push(Point::new(seg.to.x as f64, seg.to.y as f64));
                    });
                } else {
                    ring.push(Point::new(p.x as f64, p.y as f64));
                }
                last = Some((p.x, p.y));
            }
            PathSegment::CubicTo(ctrl1, ctrl2, p) => {
                if let Some((lx, ly)) = last {
                    let curve = CubicBezierSegment {
                        from: point(lx, ly),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| {
                        ring.push(Point::new(seg.to.x as f64, seg.to.y as f64));
                    });
                } else {
                    ring.push(Point::new(p.x as f64, p.y as f64));
                }
                last = Some((p.x, p.y));
            }
            // Rings are always treated as closed
            PathSegment::Close => {}
        }
    }

    finish_ring(ring, &id, shapes);
}

/// Clean up a finished subpath and keep it if it still encloses something.
fn finish_ring(mut ring: Vec<Point>, id: &Option<String>, shapes: &mut Vec<Shape>) {
    // Curve flattening and explicit closing both repeat points
    ring.dedup_by(|a, b| (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
    if ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if (first.x - last.x).abs() < 1e-6 && (first.y - last.y).abs() < 1e-6 {
            ring.pop();
        }
    }

    if ring.len() >= 3 {
        shapes.push(Shape { id: id.clone(), points: ring });
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_rect() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <rect id="box" x="10" y="10" width="80" height="80"/>
            </svg>
        "#;

        let shapes = extract_shapes_from_svg(svg).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].points.len(), 4);
        assert_eq!(shapes[0].id.as_deref(), Some("box"));
    }

    #[test]
    fn parse_polygon_element() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <polygon points="10,10 90,10 90,90 10,90"/>
            </svg>
        "#;

        let shapes = extract_shapes_from_svg(svg).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].points.len(), 4);
        assert_eq!(shapes[0].id, None);
    }

    #[test]
    fn subpaths_become_separate_shapes() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <path id="pair" d="M 0,0 L 10,0 L 10,10 Z M 50,50 L 60,50 L 60,60 L 50,60 Z"/>
            </svg>
        "#;

        let shapes = extract_shapes_from_svg(svg).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].points.len(), 3);
        assert_eq!(shapes[1].points.len(), 4);
        assert!(shapes.iter().all(|s| s.id.as_deref() == Some("pair")));
    }

    #[test]
    fn open_lines_are_skipped() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <line x1="0" y1="0" x2="50" y2="50" stroke="black"/>
            </svg>
        "#;

        assert!(matches!(extract_shapes_from_svg(svg), Err(SvgError::NoShapes)));
    }

    #[test]
    fn no_shapes_error() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
            </svg>
        "#;

        assert!(matches!(extract_shapes_from_svg(svg), Err(SvgError::NoShapes)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(extract_shapes_from_svg("not svg at all"), Err(SvgError::Parse(_))));
    }

    #[test]
    fn curve_flattening_circle() {
        let svg = r#"
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="40"/>
            </svg>
        "#;

        let shapes = extract_shapes_from_svg(svg).unwrap();
        assert_eq!(shapes.len(), 1);
        assert!(shapes[0].points.len() > 20,
            "Circle should have many points from curve flattening, got {}",
            shapes[0].points.len());
    }
}
