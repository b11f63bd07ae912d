//! Hachure fill: one rough double stroke per scan line.

use log::debug;

use crate::geometry::{Line, Point};
use crate::hatch::{hachure_lines_for_ellipse, hachure_lines_for_polygon};
use crate::ops::OpSet;
use crate::options::FillOptions;
use crate::render::RenderHelper;

use super::PatternFiller;

/// Fills shapes with sketchy parallel strokes at the hachure angle.
#[derive(Debug, Clone, Copy, Default)]
pub struct HachureFiller;

impl PatternFiller for HachureFiller {
    fn fill_polygon(
        &self,
        points: &[Point],
        options: &FillOptions,
        helper: &mut dyn RenderHelper,
    ) -> OpSet {
        let lines = hachure_lines_for_polygon(points, options);
        debug!("hachure fill: polygon with {} points, {} lines", points.len(), lines.len());
        render_lines(&lines, options, helper)
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
        let lines = hachure_lines_for_ellipse(cx, cy, width, height, options, helper);
        debug!("hachure fill: ellipse {}x{} at ({}, {}), {} lines", width, height, cx, cy, lines.len());
        render_lines(&lines, options, helper)
    }
}

fn render_lines(lines: &[Line], options: &FillOptions, helper: &mut dyn RenderHelper) -> OpSet {
    let mut set = OpSet::fill_sketch();
    for line in lines {
        set.ops.extend(helper.double_line(line.x1, line.y1, line.x2, line.y2, options, true));
    }
    set
}
