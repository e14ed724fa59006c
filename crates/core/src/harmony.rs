//! Color harmonies: fixed angular offset patterns around a base hue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::PickerError;
use crate::transform::{convert_normalized, ColorTransform};

/// A harmony scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyScheme {
    #[default]
    Single,
    Complementary,
    Analogous,
    Triad,
    SplitComplementary,
    Tetradic,
    Square,
}

impl HarmonyScheme {
    /// All schemes, in menu order.
    pub const ALL: [HarmonyScheme; 7] = [
        HarmonyScheme::Single,
        HarmonyScheme::Complementary,
        HarmonyScheme::Analogous,
        HarmonyScheme::Triad,
        HarmonyScheme::SplitComplementary,
        HarmonyScheme::Tetradic,
        HarmonyScheme::Square,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyScheme::Single => "single",
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Triad => "triad",
            HarmonyScheme::SplitComplementary => "split-complementary",
            HarmonyScheme::Tetradic => "tetradic",
            HarmonyScheme::Square => "square",
        }
    }

    /// Offsets added to the base hue for a circle of size `max`, in output
    /// order. Offsets may exceed `max`; callers reduce the sums.
    pub fn offsets(self, max: f64) -> Vec<f64> {
        match self {
            HarmonyScheme::Single => vec![0.0],
            HarmonyScheme::Complementary => vec![0.0, max / 2.0],
            HarmonyScheme::Analogous => vec![11.0 * max / 12.0, 0.0, max / 12.0],
            HarmonyScheme::Triad => vec![2.0 * max / 3.0, 0.0, max / 3.0],
            HarmonyScheme::SplitComplementary => vec![max / 2.0 + 2.0 * max / 3.0, 0.0, max / 3.0],
            HarmonyScheme::Tetradic => vec![
                0.0,
                max * 2.0 / 12.0,
                max * 6.0 / 12.0,
                max * 8.0 / 12.0,
            ],
            HarmonyScheme::Square => vec![
                0.0,
                max * 3.0 / 12.0,
                max * 6.0 / 12.0,
                max * 9.0 / 12.0,
            ],
        }
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyScheme {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        HarmonyScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == normalized)
            .ok_or_else(|| PickerError::UnknownScheme(s.to_string()))
    }
}

/// Hues of `scheme` around `base_hue` on a circle of size `max`.
///
/// Each entry is `floor(base_hue + offset) mod max`, so results are
/// integral and lie in `[0, max)`.
pub fn harmonics(scheme: HarmonyScheme, base_hue: f64, max: f64) -> Vec<f64> {
    scheme
        .offsets(max)
        .into_iter()
        .map(|offset| (base_hue + offset).floor().rem_euclid(max))
        .collect()
}

/// The harmony hues other than the base hue itself, for drawing secondary
/// markers distinct from the primary one.
pub fn additional_hues(scheme: HarmonyScheme, base_hue: f64, max: f64) -> Vec<f64> {
    harmonics(scheme, base_hue, max)
        .into_iter()
        .filter(|&h| h != base_hue)
        .collect()
}

/// One swatch of a harmony: the hue and its color at the current
/// saturation and light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonySwatch {
    pub hue: f64,
    pub color: Srgb,
}

/// Colors of every harmony hue at the given saturation and light.
pub fn harmony_swatches(
    scheme: HarmonyScheme,
    hue: f64,
    saturation: f64,
    light: f64,
    transform: &dyn ColorTransform,
) -> Vec<HarmonySwatch> {
    harmonics(scheme, hue, 360.0)
        .into_iter()
        .map(|h| HarmonySwatch {
            hue: h,
            color: convert_normalized(transform, h, saturation, light),
        })
        .collect()
}
