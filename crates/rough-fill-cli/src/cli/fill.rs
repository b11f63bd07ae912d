//! Fill command implementation.

use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use log::info;

use rough_fill::{RoughRenderer, extract_shapes_from_svg, filler_for};

use super::common::{FillArgs, JsonOutput, JsonShape, write_output};

/// Execute the fill command.
///
/// `rough-fill fill <svg|-> [options]`
pub fn cmd_fill(args: &[String]) -> Result<()> {
    let parsed = FillArgs::parse(args)?;

    let svg_path = match parsed.positional.as_slice() {
        [path] => path.as_str(),
        [] => bail!("SVG file required (use '-' for stdin)"),
        [_, extra, ..] => bail!("Unexpected argument: {}", extra),
    };

    let options = parsed.options()?;

    // Read SVG content
    let svg_content = if svg_path == "-" {
        eprintln!("Reading SVG from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read SVG from stdin")?;
        buffer
    } else {
        eprintln!("Loading: {}", svg_path);
        fs::read_to_string(svg_path)
            .with_context(|| format!("Failed to read SVG file {}", svg_path))?
    };

    let shapes = extract_shapes_from_svg(&svg_content).context("Failed to load shapes")?;
    eprintln!("Loaded {} shapes", shapes.len());

    let start = Instant::now();
    let filler = filler_for(options.fill_style);
    let mut renderer = RoughRenderer::from_options(&options);

    let mut output = JsonOutput { shapes: Vec::with_capacity(shapes.len()) };
    for (index, shape) in shapes.iter().enumerate() {
        let set = filler.fill_polygon(&shape.points, &options, &mut renderer);
        output.shapes.push(JsonShape::new(index, shape.id.clone(), &set));
    }

    let op_count: usize = output.shapes.iter().map(|s| s.ops.len()).sum();
    info!("{} fill of {} shapes took {:?}", options.fill_style, shapes.len(), start.elapsed());
    eprintln!("Filled {} shapes with {} ({} ops)", shapes.len(), options.fill_style, op_count);

    write_output(&output.to_json()?, parsed.output_path.as_deref())
}
