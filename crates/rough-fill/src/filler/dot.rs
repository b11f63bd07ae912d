//! Dot fill: small rough circles strung along horizontal scan lines.
//!
//! The dots reuse the hachure scaffolding with the angle pinned to 0, so
//! the pattern looks the same whatever hachure angle the caller asked for.
//! The hachure gap doubles as the spacing between dots along a line, and
//! every dot is nudged by up to a quarter gap on each axis.

use log::{debug, trace};

use crate::geometry::{Line, Point};
use crate::hatch::{hachure_lines_for_ellipse, hachure_lines_for_polygon};
use crate::ops::OpSet;
use crate::options::FillOptions;
use crate::render::RenderHelper;

use super::PatternFiller;

/// Curve steps used for the scan-line scaffolding; dots only need a coarse outline.
const SCAFFOLD_CURVE_STEPS: u32 = 4;

/// Fills shapes with jittered dots.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotFiller;

impl DotFiller {
    /// The caller's options with the scaffolding overrides applied.
    fn scaffold_options(options: &FillOptions) -> FillOptions {
        options
            .clone()
            .with_curve_step_count(SCAFFOLD_CURVE_STEPS)
            .with_hachure_angle(0.0)
    }
}

impl PatternFiller for DotFiller {
    fn fill_polygon(
        &self,
        points: &[Point],
        options: &FillOptions,
        helper: &mut dyn RenderHelper,
    ) -> OpSet {
        let options = Self::scaffold_options(options);
        let lines = hachure_lines_for_polygon(points, &options);
        debug!("dot fill: polygon with {} points, {} scan lines", points.len(), lines.len());
        dots_on_lines(&lines, &options, helper)
    }

    fn fill_ellipse(
        &self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        options: &FillOptions,
        helper: &mut dyn RenderHelper,
    ) -> OpSet {
        let options = Self::scaffold_options(options);
        let lines = hachure_lines_for_ellipse(cx, cy, width, height, &options, helper);
        debug!("dot fill: ellipse {}x{} at ({}, {}), {} scan lines", width, height, cx, cy, lines.len());
        dots_on_lines(&lines, &options, helper)
    }
}

/// Number of dots that fit strictly between the ends of a line.
///
/// `ceil(length / gap) - 1`: a line of length 10 with gap 2 holds 4 dots, and
/// anything no longer than one gap holds none. Dots never sit on an endpoint,
/// so shapes that share an edge do not double up along it.
pub fn dot_count(length: f64, gap: f64) -> usize {
    let count = (length / gap).ceil() - 1.0;
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Place dots along each line and collect their ellipse ops.
///
/// Dots are spaced `options.effective_gap()` apart starting one gap in from
/// each line's start, with radius `options.effective_fill_weight()`. Output
/// order is line order, then start-to-end along each line. Each dot asks the
/// helper for its x offset, then its y offset, then its ellipse.
pub fn dots_on_lines(lines: &[Line], options: &FillOptions, helper: &mut dyn RenderHelper) -> OpSet {
    let gap = options.effective_gap();
    let radius = options.effective_fill_weight();
    let jitter = gap / 4.0;

    let mut set = OpSet::fill_sketch();
    let mut marks = 0;

    for line in lines {
        let count = dot_count(line.length(), gap);
        // No direction means zero length, which also means no dots
        let Some(dir) = line.direction() else {
            continue;
        };
        trace!("scan line {:?}: {} dots", line, count);

        for i in 0..count {
            let along = gap * (i + 1) as f64;
            let nominal = Point::new(line.x1 + dir.x * along, line.y1 + dir.y * along);

            let x = helper.get_offset(nominal.x - jitter, nominal.x + jitter, options);
            let y = helper.get_offset(nominal.y - jitter, nominal.y + jitter, options);
            set.extend(helper.ellipse(x, y, radius * 2.0, radius * 2.0, options));
        }
        marks += count;
    }

    debug!("dot fill: {} dots, {} ops (gap {}, radius {})", marks, set.len(), gap, radius);
    set
}
