//! Ellipse command implementation.

use anyhow::{Context, Result, bail};

use rough_fill::{RoughRenderer, filler_for};

use super::common::{FillArgs, JsonOutput, JsonShape, write_output};

/// Execute the ellipse command.
///
/// `rough-fill ellipse <cx> <cy> <width> <height> [options]`
pub fn cmd_ellipse(args: &[String]) -> Result<()> {
    let parsed = FillArgs::parse(args)?;

    if parsed.positional.len() != 4 {
        bail!(
            "ellipse needs <cx> <cy> <width> <height>, got {} values",
            parsed.positional.len()
        );
    }

    let mut values = [0.0f64; 4];
    for ((slot, raw), name) in values
        .iter_mut()
        .zip(&parsed.positional)
        .zip(["cx", "cy", "width", "height"])
    {
        *slot = raw
            .parse()
            .with_context(|| format!("Invalid {}: {}", name, raw))?;
    }
    let [cx, cy, width, height] = values;

    let options = parsed.options()?;
    let mut renderer = RoughRenderer::from_options(&options);
    let set = filler_for(options.fill_style)
        .fill_ellipse(cx, cy, width, height, &options, &mut renderer);

    eprintln!(
        "Filled {}x{} ellipse at ({}, {}) with {} ({} ops)",
        width, height, cx, cy, options.fill_style, set.len()
    );

    let output = JsonOutput { shapes: vec![JsonShape::new(0, None, &set)] };
    write_output(&output.to_json()?, parsed.output_path.as_deref())
}
