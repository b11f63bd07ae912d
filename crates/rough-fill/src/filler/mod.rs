//! Pattern fillers: turn a closed shape into a sketchy fill.
//!
//! Every style implements [`PatternFiller`]. Callers pick a style with
//! [`FillStyle`] and get the matching filler from [`filler_for`]; the filler
//! itself is stateless and borrows the rendering helper for each call.

mod dot;
mod hachure;

pub use dot::{DotFiller, dot_count, dots_on_lines};
pub use hachure::HachureFiller;

use crate::geometry::Point;
use crate::ops::OpSet;
use crate::options::{FillOptions, FillStyle};
use crate::render::RenderHelper;

/// A fill pattern strategy.
///
/// Both operations return an op-set tagged
/// [`OpSetType::FillSketch`](crate::ops::OpSetType::FillSketch). They never
/// fail: degenerate shapes (fewer than three points, zero-sized ellipses)
/// produce an empty set. The only side effect is drawing from the helper's
/// random stream, which happens in a fixed order.
pub trait PatternFiller {
    /// Fill a closed ring; the last point connects back to the first.
    fn fill_polygon(
        &self,
        points: &[Point],
        options: &FillOptions,
        helper: &mut dyn RenderHelper,
    ) -> OpSet;

    /// Fill an ellipse centred on `(cx, cy)`; `width`/`height` are diameters.
    fn fill_ellipse(
        &self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        options: &FillOptions,
        helper: &mut dyn RenderHelper,
    ) -> OpSet;
}

/// Get the filler for a style.
pub fn filler_for(style: FillStyle) -> Box<dyn PatternFiller> {
    match style {
        FillStyle::Hachure => Box::new(HachureFiller),
        FillStyle::Dots => Box::new(DotFiller),
    }
}
