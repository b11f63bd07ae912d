//! Common utilities shared across CLI commands.
//!
//! Both fill commands take the same options, resolve them the same way
//! (flags over config file over library defaults) and print the same JSON.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};
use log::debug;
use serde::{Deserialize, Serialize};

use rough_fill::{FillOptions, FillStyle, OpSet};

// ============================================================================
// CONFIG
// ============================================================================

/// Fill settings from a YAML config file or from command-line flags.
///
/// Every field is optional. Unset fields fall through to the next layer and
/// finally to [`FillOptions::default`].
///
/// ```yaml
/// style: dots
/// hachure_gap: 6
/// fill_weight: 0.8
/// seed: 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillConfig {
    /// Fill style name (see `rough-fill styles`)
    pub style: Option<String>,
    pub hachure_gap: Option<f64>,
    pub fill_weight: Option<f64>,
    pub stroke_width: Option<f64>,
    /// Scan-line angle in degrees
    pub hachure_angle: Option<f64>,
    pub roughness: Option<f64>,
    pub bowing: Option<f64>,
    pub curve_step_count: Option<u32>,
    pub disable_multi_stroke: Option<bool>,
    pub disable_multi_stroke_fill: Option<bool>,
    pub seed: Option<u64>,
}

impl FillConfig {
    /// Load a config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config YAML {}", path.display()))
    }

    /// Merge this config with a lower-priority one, preferring self's values.
    pub fn merge_with(&self, defaults: &FillConfig) -> FillConfig {
        FillConfig {
            style: self.style.clone().or_else(|| defaults.style.clone()),
            hachure_gap: self.hachure_gap.or(defaults.hachure_gap),
            fill_weight: self.fill_weight.or(defaults.fill_weight),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            hachure_angle: self.hachure_angle.or(defaults.hachure_angle),
            roughness: self.roughness.or(defaults.roughness),
            bowing: self.bowing.or(defaults.bowing),
            curve_step_count: self.curve_step_count.or(defaults.curve_step_count),
            disable_multi_stroke: self.disable_multi_stroke.or(defaults.disable_multi_stroke),
            disable_multi_stroke_fill: self
                .disable_multi_stroke_fill
                .or(defaults.disable_multi_stroke_fill),
            seed: self.seed.or(defaults.seed),
        }
    }

    /// Build fill options from the fields that are set.
    pub fn to_options(&self) -> Result<FillOptions> {
        let mut options = FillOptions::default();

        if let Some(style) = &self.style {
            options.fill_style = style.parse::<FillStyle>()?;
        }
        if let Some(gap) = self.hachure_gap {
            options.hachure_gap = gap;
        }
        if let Some(weight) = self.fill_weight {
            options.fill_weight = weight;
        }
        if let Some(width) = self.stroke_width {
            options.stroke_width = width;
        }
        if let Some(angle) = self.hachure_angle {
            options.hachure_angle = angle;
        }
        if let Some(roughness) = self.roughness {
            options.roughness = roughness;
        }
        if let Some(bowing) = self.bowing {
            options.bowing = bowing;
        }
        if let Some(steps) = self.curve_step_count {
            options.curve_step_count = steps;
        }
        if let Some(disable) = self.disable_multi_stroke {
            options.disable_multi_stroke = disable;
        }
        if let Some(disable) = self.disable_multi_stroke_fill {
            options.disable_multi_stroke_fill = disable;
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }

        Ok(options)
    }
}

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Parsed arguments of a fill command.
#[derive(Debug, Default)]
pub struct FillArgs {
    /// Arguments that are not options, in order
    pub positional: Vec<String>,
    /// Settings given as flags
    pub overrides: FillConfig,
    pub config_path: Option<String>,
    pub output_path: Option<String>,
}

impl FillArgs {
    /// Parse command arguments (everything after the subcommand name).
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = FillArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-s" | "--style" => {
                    i += 1;
                    parsed.overrides.style = Some(value(args, i, "--style")?.to_string());
                }
                "-g" | "--gap" => {
                    i += 1;
                    parsed.overrides.hachure_gap = Some(number(args, i, "--gap")?);
                }
                "-w" | "--weight" => {
                    i += 1;
                    parsed.overrides.fill_weight = Some(number(args, i, "--weight")?);
                }
                "--stroke-width" => {
                    i += 1;
                    parsed.overrides.stroke_width = Some(number(args, i, "--stroke-width")?);
                }
                "-a" | "--angle" => {
                    i += 1;
                    parsed.overrides.hachure_angle = Some(number(args, i, "--angle")?);
                }
                "-r" | "--roughness" => {
                    i += 1;
                    parsed.overrides.roughness = Some(number(args, i, "--roughness")?);
                }
                "--seed" => {
                    i += 1;
                    parsed.overrides.seed = Some(number(args, i, "--seed")?);
                }
                "-c" | "--config" => {
                    i += 1;
                    parsed.config_path = Some(value(args, i, "--config")?.to_string());
                }
                "-o" | "--output" => {
                    i += 1;
                    parsed.output_path = Some(value(args, i, "--output")?.to_string());
                }
                arg if is_option(arg) => bail!("Unknown option: {}", arg),
                arg => parsed.positional.push(arg.to_string()),
            }
            i += 1;
        }

        Ok(parsed)
    }

    /// Resolve the final options: flags, then the config file, then defaults.
    pub fn options(&self) -> Result<FillOptions> {
        let file = match &self.config_path {
            Some(path) => {
                debug!("loading config from {}", path);
                FillConfig::load(path)?
            }
            None => FillConfig::default(),
        };
        self.overrides.merge_with(&file).to_options()
    }
}

/// `-` alone means stdin and negative numbers are values, not options.
fn is_option(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-') && arg.parse::<f64>().is_err()
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn number<T>(args: &[String], i: usize, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = value(args, i, flag)?;
    raw.parse()
        .with_context(|| format!("Invalid value for {}: {}", flag, raw))
}

// ============================================================================
// JSON OUTPUT
// ============================================================================

/// A drawing op in JSON output format.
#[derive(Debug, Serialize)]
pub struct JsonOp {
    pub op: &'static str,
    pub data: Vec<f64>,
}

/// One filled shape in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonShape {
    pub id: Option<String>,
    pub index: usize,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ops: Vec<JsonOp>,
}

impl JsonShape {
    pub fn new(index: usize, id: Option<String>, set: &OpSet) -> Self {
        Self {
            id,
            index,
            kind: set.kind.name(),
            ops: set
                .ops
                .iter()
                .map(|op| JsonOp { op: op.name(), data: op.data() })
                .collect(),
        }
    }
}

/// Top-level JSON output.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub shapes: Vec<JsonShape>,
}

impl JsonOutput {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize output")
    }
}

/// Write output to a file, or to stdout for `None` and `-`.
pub fn write_output(output: &str, output_path: Option<&str>) -> Result<()> {
    match output_path {
        Some("-") | None => {
            println!("{}", output);
        }
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output file {}", path))?;
            eprintln!("Wrote: {}", path);
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
