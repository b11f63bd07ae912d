//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `fill` - Pattern-fill every closed shape in an SVG
//! - `ellipse` - Pattern-fill a single ellipse
//! - `styles` - List available fill styles

pub mod common;
pub mod ellipse;
pub mod fill;

pub use ellipse::cmd_ellipse;
pub use fill::cmd_fill;
