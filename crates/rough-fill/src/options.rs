//! Fill options: the knobs shared by every filler and the rendering helper.
//!
//! Options are a plain value. Builders take `self` and hand back a new value,
//! so a filler that needs different settings clones the caller's options and
//! overrides fields on the copy. The caller's value is never touched.

use std::fmt;
use std::str::FromStr;

/// Minimum spacing between scan lines (and between dots along a line).
pub const MIN_HACHURE_GAP: f64 = 0.1;

/// Fill pattern styles a caller can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillStyle {
    /// Parallel rough strokes along the hachure lines.
    #[default]
    Hachure,
    /// Small rough circles placed along the hachure lines.
    Dots,
}

impl FillStyle {
    /// Get all available styles.
    pub fn all() -> &'static [FillStyle] {
        &[FillStyle::Hachure, FillStyle::Dots]
    }

    /// Get style name as string.
    pub fn name(&self) -> &'static str {
        match self {
            FillStyle::Hachure => "hachure",
            FillStyle::Dots => "dots",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            FillStyle::Hachure => "Parallel sketchy strokes at the hachure angle",
            FillStyle::Dots => "Jittered dots spaced along horizontal scan lines",
        }
    }
}

impl fmt::Display for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillStyle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hachure" | "lines" => Ok(FillStyle::Hachure),
            "dots" | "dot" | "stipple" => Ok(FillStyle::Dots),
            _ => Err(OptionsError::UnknownFillStyle(s.to_string())),
        }
    }
}

/// Error type for option parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    UnknownFillStyle(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::UnknownFillStyle(name) => write!(f, "unknown fill style: {}", name),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Options controlling fill geometry and roughness.
///
/// Negative `hachure_gap` and `fill_weight` are sentinels meaning "derive
/// from `stroke_width`"; see [`FillOptions::effective_gap`] and
/// [`FillOptions::effective_fill_weight`].
#[derive(Debug, Clone, PartialEq)]
pub struct FillOptions {
    /// Amount of jitter; 0 draws exact geometry
    pub roughness: f64,
    /// How far rough strokes bow away from a straight line
    pub bowing: f64,
    /// Upper bound for endpoint jitter on rough strokes
    pub max_randomness_offset: f64,
    /// Base line thickness
    pub stroke_width: f64,
    /// Dot radius / fill stroke thickness (negative = stroke_width / 2)
    pub fill_weight: f64,
    /// Spacing between scan lines (negative = stroke_width * 4)
    pub hachure_gap: f64,
    /// Scan-line angle in degrees
    pub hachure_angle: f64,
    /// Minimum number of points used to approximate an ellipse
    pub curve_step_count: u32,
    /// How closely rough ellipses follow the true radii (1.0 = exactly)
    pub curve_fitting: f64,
    /// Catmull-Rom tension used when fitting curves through points
    pub curve_tightness: f64,
    /// Draw strokes once instead of twice
    pub disable_multi_stroke: bool,
    /// Draw fill strokes once instead of twice
    pub disable_multi_stroke_fill: bool,
    /// Fill pattern
    pub fill_style: FillStyle,
    /// Random seed; 0 means "pick one"
    pub seed: u64,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
            stroke_width: 1.0,
            fill_weight: -1.0,
            hachure_gap: -1.0,
            hachure_angle: -41.0,
            curve_step_count: 9,
            curve_fitting: 0.95,
            curve_tightness: 0.0,
            disable_multi_stroke: false,
            disable_multi_stroke_fill: false,
            fill_style: FillStyle::Hachure,
            seed: 0,
        }
    }
}

impl FillOptions {
    pub fn with_roughness(mut self, roughness: f64) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_bowing(mut self, bowing: f64) -> Self {
        self.bowing = bowing;
        self
    }

    pub fn with_max_randomness_offset(mut self, offset: f64) -> Self {
        self.max_randomness_offset = offset;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_fill_weight(mut self, fill_weight: f64) -> Self {
        self.fill_weight = fill_weight;
        self
    }

    pub fn with_hachure_gap(mut self, gap: f64) -> Self {
        self.hachure_gap = gap;
        self
    }

    pub fn with_hachure_angle(mut self, angle_degrees: f64) -> Self {
        self.hachure_angle = angle_degrees;
        self
    }

    pub fn with_curve_step_count(mut self, steps: u32) -> Self {
        self.curve_step_count = steps;
        self
    }

    pub fn with_curve_fitting(mut self, fitting: f64) -> Self {
        self.curve_fitting = fitting;
        self
    }

    pub fn with_curve_tightness(mut self, tightness: f64) -> Self {
        self.curve_tightness = tightness;
        self
    }

    pub fn with_disable_multi_stroke(mut self, disable: bool) -> Self {
        self.disable_multi_stroke = disable;
        self
    }

    pub fn with_disable_multi_stroke_fill(mut self, disable: bool) -> Self {
        self.disable_multi_stroke_fill = disable;
        self
    }

    pub fn with_fill_style(mut self, style: FillStyle) -> Self {
        self.fill_style = style;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Spacing actually used between scan lines.
    ///
    /// Negative gaps fall back to `stroke_width * 4`; the result is never
    /// below [`MIN_HACHURE_GAP`], which bounds the number of lines and dots.
    pub fn effective_gap(&self) -> f64 {
        let gap = if self.hachure_gap < 0.0 {
            self.stroke_width * 4.0
        } else {
            self.hachure_gap
        };
        // f64::max ignores a NaN operand, so a NaN gap also lands on the floor
        gap.max(MIN_HACHURE_GAP)
    }

    /// Dot radius / fill stroke weight actually used.
    pub fn effective_fill_weight(&self) -> f64 {
        if self.fill_weight < 0.0 {
            self.stroke_width / 2.0
        } else {
            self.fill_weight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sentinels_derive_from_stroke_width() {
        let options = FillOptions::default()
            .with_stroke_width(2.0)
            .with_hachure_gap(-1.0)
            .with_fill_weight(-1.0);

        assert_eq!(options.effective_gap(), 8.0);
        assert_eq!(options.effective_fill_weight(), 1.0);
    }

    #[test]
    fn explicit_values_are_kept() {
        let options = FillOptions::default()
            .with_hachure_gap(5.0)
            .with_fill_weight(0.75);

        assert_eq!(options.effective_gap(), 5.0);
        assert_eq!(options.effective_fill_weight(), 0.75);
    }

    #[test]
    fn gap_is_floored() {
        let zero = FillOptions::default().with_hachure_gap(0.0);
        assert_eq!(zero.effective_gap(), MIN_HACHURE_GAP);

        // Negative gap with a zero stroke width still terminates
        let derived_zero = FillOptions::default()
            .with_hachure_gap(-1.0)
            .with_stroke_width(0.0);
        assert_eq!(derived_zero.effective_gap(), MIN_HACHURE_GAP);

        let nan = FillOptions::default().with_hachure_gap(f64::NAN);
        assert_eq!(nan.effective_gap(), MIN_HACHURE_GAP);
    }

    #[test]
    fn builders_leave_the_original_alone() {
        let original = FillOptions::default();
        let changed = original.clone().with_hachure_angle(0.0).with_curve_step_count(4);

        assert_eq!(original.hachure_angle, -41.0);
        assert_eq!(original.curve_step_count, 9);
        assert_eq!(changed.hachure_angle, 0.0);
        assert_eq!(changed.curve_step_count, 4);
    }

    #[test]
    fn style_parsing() {
        assert_eq!("dots".parse::<FillStyle>(), Ok(FillStyle::Dots));
        assert_eq!("DOT".parse::<FillStyle>(), Ok(FillStyle::Dots));
        assert_eq!("hachure".parse::<FillStyle>(), Ok(FillStyle::Hachure));
        assert_eq!(
            "zigzag".parse::<FillStyle>(),
            Err(OptionsError::UnknownFillStyle("zigzag".to_string()))
        );
    }

    #[test]
    fn style_names_round_trip() {
        for style in FillStyle::all() {
            assert_eq!(style.name().parse::<FillStyle>(), Ok(*style));
        }
    }
}
