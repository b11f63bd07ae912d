//! # rough-fill
//!
//! Hand-drawn pattern fills for closed shapes.
//!
//! Give a filler a polygon ring or an ellipse plus [`FillOptions`], and it
//! hands back an [`OpSet`] of sketchy drawing ops: rough parallel strokes
//! ([`HachureFiller`]) or jittered dots ([`DotFiller`]). Randomness comes
//! from an injected [`RenderHelper`], so a seeded [`RoughRenderer`] always
//! reproduces the same fill.
//!
//! ```
//! use rough_fill::{filler_for, FillOptions, FillStyle, Point, RoughRenderer};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let options = FillOptions::default().with_hachure_gap(5.0).with_seed(1);
//! let mut renderer = RoughRenderer::from_options(&options);
//!
//! let dots = filler_for(FillStyle::Dots).fill_polygon(&square, &options, &mut renderer);
//! assert!(!dots.is_empty());
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod clip;
pub mod filler;
pub mod geometry;
pub mod hatch;
pub mod ops;
pub mod options;
pub mod render;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use clip::{point_in_polygon, scanline_spans};
pub use filler::{DotFiller, HachureFiller, PatternFiller, dot_count, dots_on_lines, filler_for};
pub use geometry::{Line, Point};
pub use hatch::{hachure_lines_for_ellipse, hachure_lines_for_polygon};
pub use ops::{Op, OpSet, OpSetType};
pub use options::{FillOptions, FillStyle, OptionsError};
pub use render::{EllipseParams, RenderHelper, RoughRenderer};
pub use svg::{Shape, SvgError, extract_shapes_from_svg};
