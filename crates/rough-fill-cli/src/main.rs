//! rough-fill - sketchy pattern fills from the command line
//!
//! Usage:
//!   rough-fill fill <svg|-> [options]            Fill every closed shape in an SVG
//!   rough-fill ellipse <cx> <cy> <w> <h> [opts]  Fill a single ellipse
//!   rough-fill styles                            List available fill styles
//!
//! Set `RUST_LOG=debug` to see per-fill diagnostics from the library.

mod cli;

use std::env;
use std::process;

use rough_fill::FillStyle;

use cli::{cmd_ellipse, cmd_fill};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let prog = args.first().map(String::as_str).unwrap_or("rough-fill");

    let Some(command) = args.get(1) else {
        print_usage(prog);
        process::exit(1);
    };

    let result = match command.as_str() {
        "fill" => cmd_fill(&args[2..]),
        "ellipse" => cmd_ellipse(&args[2..]),
        "styles" => {
            cmd_styles();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage(prog);
            Ok(())
        }
        unknown => {
            eprintln!("Unknown command: {}", unknown);
            eprintln!();
            print_usage(prog);
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn print_usage(prog: &str) {
    eprintln!("rough-fill - hand-drawn pattern fills for closed shapes");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {} fill <svg> [options]", prog);
    eprintln!("  {} ellipse <cx> <cy> <width> <height> [options]", prog);
    eprintln!("  {} styles", prog);
    eprintln!();
    eprintln!("Fill options:");
    eprintln!("  -s, --style <name>      Fill style: hachure, dots (default: hachure)");
    eprintln!("  -g, --gap <n>           Spacing between lines and dots (default: stroke width * 4)");
    eprintln!("  -w, --weight <n>        Dot radius / fill stroke weight (default: stroke width / 2)");
    eprintln!("      --stroke-width <n>  Base stroke width (default: 1)");
    eprintln!("  -a, --angle <deg>       Hachure angle (default: -41; dots ignore it)");
    eprintln!("  -r, --roughness <n>     Amount of jitter, 0 for exact geometry (default: 1)");
    eprintln!("      --seed <n>          Random seed, 0 picks one (default: 0)");
    eprintln!("  -c, --config <file>     YAML file with default settings; flags override it");
    eprintln!("  -o, --output <file>     Output file (- for stdout, default: stdout)");
    eprintln!();
    eprintln!("Stdin support:");
    eprintln!("  Use '-' as input file to read SVG from stdin:");
    eprintln!("  echo '<svg>...</svg>' | {} fill - -s dots", prog);
}

fn cmd_styles() {
    println!("Available fill styles:");
    for style in FillStyle::all() {
        println!("  {:<10} {}", style.name(), style.description());
    }
}
