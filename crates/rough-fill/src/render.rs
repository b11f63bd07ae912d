//! Rough rendering primitives: jitter, sketchy lines and wobbly ellipses.
//!
//! Fillers never own randomness. They are handed a [`RenderHelper`] and call
//! it in a fixed order, so a helper seeded the same way reproduces the same
//! fill. [`RoughRenderer`] is the stock implementation built on a seeded
//! `StdRng`; tests swap in deterministic doubles.
//!
//! The stroke shapes follow the RoughJS algorithms:
//! - endpoint randomization scaled by roughness
//! - bowing of lines toward a perpendicular
//! - a second overlaid stroke for the hand-drawn double line look
//! - ellipses traced through jittered points and fitted with Bézier curves

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Point;
use crate::ops::{Op, OpSet, OpSetType};
use crate::options::FillOptions;

/// Sampling parameters for an ellipse outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseParams {
    /// Angle between successive samples, in radians
    pub increment: f64,
    /// Horizontal radius after jitter
    pub rx: f64,
    /// Vertical radius after jitter
    pub ry: f64,
    /// Number of samples around the full circumference
    pub step_count: u32,
}

/// The drawing services a filler relies on.
///
/// ## Rust Lesson #24: Traits as Seams
///
/// A trait is like a TypeScript interface, except implementations can be
/// added for any type. Fillers take `&mut dyn RenderHelper`, so the real
/// renderer and a test double are interchangeable at runtime.
pub trait RenderHelper {
    /// A jittered value in `[low, high]`.
    fn get_offset(&mut self, low: f64, high: f64, options: &FillOptions) -> f64;

    /// A jittered offset around zero, `roughness * uniform(-x, x)`.
    fn rand_offset(&mut self, x: f64, options: &FillOptions) -> f64;

    /// Step count and jittered radii for an ellipse of the given diameters.
    fn ellipse_params(&mut self, width: f64, height: f64, options: &FillOptions) -> EllipseParams;

    /// A rough ellipse outline centred on `(cx, cy)`; `width`/`height` are diameters.
    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64, options: &FillOptions) -> OpSet;

    /// One or two rough strokes from `(x1, y1)` to `(x2, y2)`.
    ///
    /// `filling` selects which multi-stroke switch applies.
    fn double_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        options: &FillOptions,
        filling: bool,
    ) -> Vec<Op>;
}

/// Seeded RoughJS-style renderer.
#[derive(Clone, Debug)]
pub struct RoughRenderer {
    rng: StdRng,
}

impl RoughRenderer {
    /// Create a renderer. A seed of 0 draws a fresh seed from the OS.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            StdRng::from_os_rng()
        } else {
            StdRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Create a renderer seeded from `options.seed`.
    pub fn from_options(options: &FillOptions) -> Self {
        Self::new(options.seed)
    }

    #[inline]
    fn random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    #[inline]
    fn offset(&mut self, min: f64, max: f64, options: &FillOptions, roughness_gain: f64) -> f64 {
        options.roughness * roughness_gain * (self.random() * (max - min) + min)
    }

    #[inline]
    fn offset_opt(&mut self, x: f64, options: &FillOptions, roughness_gain: f64) -> f64 {
        self.offset(-x, x, options, roughness_gain)
    }

    /// A single bowed stroke as a move plus one cubic Bézier.
    ///
    /// `overlay` marks the second stroke of a double line, which uses half
    /// the endpoint jitter so the two strokes stay close together.
    fn line(&mut self, from: Point, to: Point, options: &FillOptions, overlay: bool) -> Vec<Op> {
        let length_sq = (from.x - to.x).powi(2) + (from.y - to.y).powi(2);
        let length = length_sq.sqrt();

        // Dampening: long lines get proportionally less roughness
        let roughness_gain = if length < 200.0 {
            1.0
        } else if length > 500.0 {
            0.4
        } else {
            -0.0016668 * length + 1.233334
        };

        let mut offset = options.max_randomness_offset;
        if offset * offset * 100.0 > length_sq {
            offset = length / 10.0;
        }
        let jitter = if overlay { offset / 2.0 } else { offset };

        let diverge_point = 0.2 + self.random() * 0.2;

        let mid_disp_x = options.bowing * options.max_randomness_offset * (to.y - from.y) / 200.0;
        let mid_disp_y = options.bowing * options.max_randomness_offset * (from.x - to.x) / 200.0;
        let mid_disp_x = self.offset_opt(mid_disp_x, options, roughness_gain);
        let mid_disp_y = self.offset_opt(mid_disp_y, options, roughness_gain);

        let mut ops = Vec::with_capacity(2);
        let start_x = from.x + self.offset_opt(jitter, options, roughness_gain);
        let start_y = from.y + self.offset_opt(jitter, options, roughness_gain);
        ops.push(Op::Move { x: start_x, y: start_y });

        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let cp1x = mid_disp_x + from.x + dx * diverge_point + self.offset_opt(jitter, options, roughness_gain);
        let cp1y = mid_disp_y + from.y + dy * diverge_point + self.offset_opt(jitter, options, roughness_gain);
        let cp2x = mid_disp_x + from.x + 2.0 * dx * diverge_point + self.offset_opt(jitter, options, roughness_gain);
        let cp2y = mid_disp_y + from.y + 2.0 * dy * diverge_point + self.offset_opt(jitter, options, roughness_gain);
        let x = to.x + self.offset_opt(jitter, options, roughness_gain);
        let y = to.y + self.offset_opt(jitter, options, roughness_gain);
        ops.push(Op::BezierCurveTo { cp1x, cp1y, cp2x, cp2y, x, y });

        ops
    }

    /// Points around an ellipse, jittered unless roughness is zero.
    ///
    /// The rough variant starts slightly inside the outline and overshoots
    /// the start by `overlap` radians so the stroke reads as hand-closed.
    #[allow(clippy::too_many_arguments)]
    fn ellipse_points(
        &mut self,
        increment: f64,
        center: Point,
        rx: f64,
        ry: f64,
        offset: f64,
        overlap: f64,
        options: &FillOptions,
    ) -> Vec<Point> {
        let at = |scale: f64, angle: f64| {
            Point::new(center.x + scale * rx * angle.cos(), center.y + scale * ry * angle.sin())
        };
        let mut points = Vec::new();

        if options.roughness == 0.0 {
            let increment = increment / 4.0;
            points.push(at(1.0, -increment));
            let mut angle = 0.0;
            while angle <= PI * 2.0 {
                points.push(at(1.0, angle));
                angle += increment;
            }
            points.push(at(1.0, 0.0));
            points.push(at(1.0, increment));
            return points;
        }

        let rad_offset = self.offset_opt(0.5, options, 1.0) - PI / 2.0;

        let jittered = |renderer: &mut Self, scale: f64, angle: f64| {
            let base = at(scale, angle);
            let jx = renderer.offset_opt(offset, options, 1.0);
            let jy = renderer.offset_opt(offset, options, 1.0);
            Point::new(base.x + jx, base.y + jy)
        };

        points.push(jittered(self, 0.9, rad_offset - increment));

        let end_angle = PI * 2.0 + rad_offset - 0.01;
        let mut angle = rad_offset;
        while angle < end_angle {
            points.push(jittered(self, 1.0, angle));
            angle += increment;
        }

        points.push(jittered(self, 1.0, rad_offset + PI * 2.0 + overlap * 0.5));
        points.push(jittered(self, 0.98, rad_offset + overlap));
        points.push(jittered(self, 0.9, rad_offset + overlap * 0.5));

        points
    }
}

/// Fit a smooth curve through `points` (Catmull-Rom converted to cubic Béziers).
///
/// The first and last points only steer the tangents; the curve starts at
/// `points[1]` and ends at `points[len - 2]`.
fn curve(points: &[Point], options: &FillOptions) -> Vec<Op> {
    let len = points.len();
    let mut ops = Vec::with_capacity(len);

    if len > 3 {
        let s = 1.0 - options.curve_tightness;
        ops.push(Op::Move { x: points[1].x, y: points[1].y });

        // windows(4) = [p0, p1, p2, p3] sliding one point at a time
        for w in points.windows(4) {
            let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);
            ops.push(Op::BezierCurveTo {
                cp1x: p1.x + (s * p2.x - s * p0.x) / 6.0,
                cp1y: p1.y + (s * p2.y - s * p0.y) / 6.0,
                cp2x: p2.x + (s * p1.x - s * p3.x) / 6.0,
                cp2y: p2.y + (s * p1.y - s * p3.y) / 6.0,
                x: p2.x,
                y: p2.y,
            });
        }
    } else if len == 3 {
        ops.push(Op::Move { x: points[1].x, y: points[1].y });
        ops.push(Op::BezierCurveTo {
            cp1x: points[1].x,
            cp1y: points[1].y,
            cp2x: points[2].x,
            cp2y: points[2].y,
            x: points[2].x,
            y: points[2].y,
        });
    } else if len == 2 {
        ops.push(Op::Move { x: points[0].x, y: points[0].y });
        ops.push(Op::LineTo { x: points[1].x, y: points[1].y });
    }

    ops
}

impl RenderHelper for RoughRenderer {
    fn get_offset(&mut self, low: f64, high: f64, options: &FillOptions) -> f64 {
        // Always draw, even at roughness 0, so the stream position only
        // depends on how many offsets were requested.
        let sample = low + self.random() * (high - low);
        let mid = (low + high) / 2.0;
        mid + (sample - mid) * options.roughness.clamp(0.0, 1.0)
    }

    fn rand_offset(&mut self, x: f64, options: &FillOptions) -> f64 {
        self.offset_opt(x, options, 1.0)
    }

    fn ellipse_params(&mut self, width: f64, height: f64, options: &FillOptions) -> EllipseParams {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let psq = (PI * 2.0 * ((half_w * half_w + half_h * half_h) / 2.0).sqrt()).sqrt();

        let csc = options.curve_step_count.max(1) as f64;
        let steps = csc.max(csc / 200f64.sqrt() * psq).ceil();
        // `as u32` saturates; a NaN size collapses to the minimum
        let step_count = (steps as u32).max(options.curve_step_count.max(1));
        let increment = (PI * 2.0) / step_count as f64;

        let fit_randomness = 1.0 - options.curve_fitting;
        let rx = half_w.abs();
        let ry = half_h.abs();
        let rx = rx + self.rand_offset(rx * fit_randomness, options);
        let ry = ry + self.rand_offset(ry * fit_randomness, options);

        EllipseParams { increment, rx, ry, step_count }
    }

    fn ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64, options: &FillOptions) -> OpSet {
        let params = self.ellipse_params(width, height, options);
        let center = Point::new(cx, cy);

        let spread = self.offset(0.4, 1.0, options, 1.0);
        let overlap = params.increment * self.offset(0.1, spread, options, 1.0);

        let points = self.ellipse_points(params.increment, center, params.rx, params.ry, 1.0, overlap, options);
        let mut ops = curve(&points, options);

        if !options.disable_multi_stroke && options.roughness != 0.0 {
            let points = self.ellipse_points(params.increment, center, params.rx, params.ry, 1.5, 0.0, options);
            ops.extend(curve(&points, options));
        }

        OpSet::with_ops(OpSetType::Path, ops)
    }

    fn double_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        options: &FillOptions,
        filling: bool,
    ) -> Vec<Op> {
        let single_stroke = if filling {
            options.disable_multi_stroke_fill
        } else {
            options.disable_multi_stroke
        };

        let from = Point::new(x1, y1);
        let to = Point::new(x2, y2);
        let mut ops = self.line(from, to, options, false);
        if !single_stroke {
            ops.extend(self.line(from, to, options, true));
        }
        ops
    }
}
