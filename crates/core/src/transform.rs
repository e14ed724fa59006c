//! The color transform seam: `(hue, saturation, light) -> Srgb`.
//!
//! Samplers never depend on a concrete color space. They receive a
//! `&dyn ColorTransform` and reach it only through [`convert_normalized`],
//! which reduces hue modulo 360 and clamps saturation/light into [0, 100]
//! before the call.

use crate::color::{oklch_to_srgb, OkLch, Srgb};
use crate::error::PickerError;

/// `hsluv` can overshoot [0, 1] by float noise at the gamut edge.
fn clamped((r, g, b): (f64, f64, f64)) -> Srgb {
    Srgb {
        r: r.clamp(0.0, 1.0),
        g: g.clamp(0.0, 1.0),
        b: b.clamp(0.0, 1.0),
    }
}

/// Maps a cylindrical `(hue, saturation, light)` triple to a display color.
///
/// Implementations must be pure and total over hue in [0, 360) and
/// saturation/light in [0, 100]. The trait is object-safe.
pub trait ColorTransform {
    /// Converts one triple. Arguments are already normalized by the caller.
    fn convert(&self, hue: f64, saturation: f64, light: f64) -> Srgb;

    /// Short registry name of this transform.
    fn name(&self) -> &'static str;
}

/// HPLuv: equal saturation means equal chroma across hues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hpluv;

impl ColorTransform for Hpluv {
    fn convert(&self, hue: f64, saturation: f64, light: f64) -> Srgb {
        clamped(hsluv::hpluv_to_rgb(hue, saturation, light))
    }

    fn name(&self) -> &'static str {
        "hpluv"
    }
}

/// HSLuv: saturation 100 reaches the gamut edge along each hue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hsluv;

impl ColorTransform for Hsluv {
    fn convert(&self, hue: f64, saturation: f64, light: f64) -> Srgb {
        clamped(hsluv::hsluv_to_rgb(hue, saturation, light))
    }

    fn name(&self) -> &'static str {
        "hsluv"
    }
}

/// Chroma reached by OKLCh at saturation 100.
pub const OKLCH_MAX_CHROMA: f64 = 0.37;

/// OKLCh with saturation and light rescaled from percentages.
/// Out-of-gamut results are clamped to sRGB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OkLchTransform;

impl ColorTransform for OkLchTransform {
    fn convert(&self, hue: f64, saturation: f64, light: f64) -> Srgb {
        oklch_to_srgb(OkLch {
            l: light / 100.0,
            c: saturation / 100.0 * OKLCH_MAX_CHROMA,
            h: hue,
        })
    }

    fn name(&self) -> &'static str {
        "oklch"
    }
}

/// All available transform names.
const TRANSFORM_NAMES: &[&str] = &["hpluv", "hsluv", "oklch"];

/// Enumeration of the built-in transforms, for name-based selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransformKind {
    #[default]
    Hpluv,
    Hsluv,
    OkLch,
}

impl TransformKind {
    /// Looks up a transform by name (case insensitive).
    ///
    /// Returns `PickerError::UnknownTransform` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, PickerError> {
        match name.to_ascii_lowercase().as_str() {
            "hpluv" => Ok(TransformKind::Hpluv),
            "hsluv" => Ok(TransformKind::Hsluv),
            "oklch" => Ok(TransformKind::OkLch),
            _ => Err(PickerError::UnknownTransform(name.to_string())),
        }
    }

    /// Returns a slice of all recognized transform names.
    pub fn list_names() -> &'static [&'static str] {
        TRANSFORM_NAMES
    }
}

impl ColorTransform for TransformKind {
    fn convert(&self, hue: f64, saturation: f64, light: f64) -> Srgb {
        match self {
            TransformKind::Hpluv => Hpluv.convert(hue, saturation, light),
            TransformKind::Hsluv => Hsluv.convert(hue, saturation, light),
            TransformKind::OkLch => OkLchTransform.convert(hue, saturation, light),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            TransformKind::Hpluv => Hpluv.name(),
            TransformKind::Hsluv => Hsluv.name(),
            TransformKind::OkLch => OkLchTransform.name(),
        }
    }
}

/// Reduces hue into [0, 360). NaN maps to 0.
pub fn wrap_hue(hue: f64) -> f64 {
    if hue.is_nan() {
        return 0.0;
    }
    let h = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Clamps a percentage channel into [0, 100]. NaN maps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Converts through `transform` after wrapping hue and clamping
/// saturation/light. This is the only path from a sampler to a transform.
pub fn convert_normalized(
    transform: &dyn ColorTransform,
    hue: f64,
    saturation: f64,
    light: f64,
) -> Srgb {
    transform.convert(wrap_hue(hue), clamp_percent(saturation), clamp_percent(light))
}
