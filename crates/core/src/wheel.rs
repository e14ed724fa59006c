//! Hue/saturation wheel sampling.
//!
//! Every cell of a square grid is mapped to a signed unit-square coordinate
//! with y pointing up. The vector's angle is the cell's hue and its length
//! (times 100) is the saturation; light is held at the current value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::PickerError;
use crate::surface::Surface;
use crate::transform::{convert_normalized, ColorTransform};

/// What to do with cells whose vector lies outside the unit disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WheelPolicy {
    /// Cap saturation at 100 and color every cell (filled square).
    #[default]
    Clamp,
    /// Leave cells outside the disk blank (circular gradient).
    Mask,
}

impl fmt::Display for WheelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelPolicy::Clamp => f.write_str("clamp"),
            WheelPolicy::Mask => f.write_str("mask"),
        }
    }
}

impl FromStr for WheelPolicy {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamp" => Ok(WheelPolicy::Clamp),
            "mask" => Ok(WheelPolicy::Mask),
            _ => Err(PickerError::Config(format!(
                "unknown wheel policy '{s}' (expected clamp or mask)"
            ))),
        }
    }
}

/// Pixel size of the wheel canvas and of one sampling cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelGeometry {
    pub width: usize,
    pub height: usize,
    pub cell_size: usize,
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            cell_size: 4,
        }
    }
}

impl WheelGeometry {
    /// Creates a validated geometry.
    pub fn new(width: usize, height: usize, cell_size: usize) -> Result<Self, PickerError> {
        let g = Self {
            width,
            height,
            cell_size,
        };
        g.validate()?;
        Ok(g)
    }

    /// Rejects zero sizes and canvases smaller than one cell.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.cell_size == 0 || self.cols() == 0 || self.rows() == 0 {
            return Err(PickerError::InvalidDimensions);
        }
        Ok(())
    }

    /// Number of cell columns, `floor(width / cell_size)`.
    pub fn cols(&self) -> usize {
        self.width.checked_div(self.cell_size).unwrap_or(0)
    }

    /// Number of cell rows, `floor(height / cell_size)`.
    pub fn rows(&self) -> usize {
        self.height.checked_div(self.cell_size).unwrap_or(0)
    }
}

/// One emitted wheel cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelSample {
    pub x: usize,
    pub y: usize,
    pub hue: f64,
    pub saturation: f64,
    pub color: Srgb,
}

/// Angle (degrees in [0, 360)) and length of the cell's unit-square vector.
///
/// `atan2(0, 0)` is 0, so the exact center yields hue 0 with length 0.
pub fn cell_polar(x: usize, y: usize, cols: usize, rows: usize) -> (f64, f64) {
    let px = x as f64 / (cols as f64 / 2.0) - 1.0;
    let py = -(y as f64) / (rows as f64 / 2.0) + 1.0;
    let angle = py.atan2(px).to_degrees();
    let hue = (360.0 + angle) % 360.0;
    (hue, (px * px + py * py).sqrt())
}

/// Samples every cell of the wheel grid, row-major by `x` then `y`.
///
/// Under [`WheelPolicy::Mask`] cells with length above 1 are omitted.
pub fn sample_wheel(
    geometry: &WheelGeometry,
    light: f64,
    policy: WheelPolicy,
    transform: &dyn ColorTransform,
) -> Vec<WheelSample> {
    let (cols, rows) = (geometry.cols(), geometry.rows());
    let mut samples = Vec::with_capacity(cols * rows);
    for x in 0..cols {
        for y in 0..rows {
            let (hue, magnitude) = cell_polar(x, y, cols, rows);
            let saturation = match policy {
                WheelPolicy::Clamp => (magnitude * 100.0).min(100.0),
                WheelPolicy::Mask if magnitude > 1.0 => continue,
                WheelPolicy::Mask => magnitude * 100.0,
            };
            samples.push(WheelSample {
                x,
                y,
                hue,
                saturation,
                color: convert_normalized(transform, hue, saturation, light),
            });
        }
    }
    samples
}

/// Fills one `cell_size` square per sample.
pub fn paint_wheel(samples: &[WheelSample], geometry: &WheelGeometry, surface: &mut dyn Surface) {
    let cell = geometry.cell_size;
    for s in samples {
        surface.fill_rect(s.x * cell, s.y * cell, cell, cell, s.color);
    }
}

/// Pixel position on a `width` x `height` wheel of the point with the given
/// hue and saturation. Saturation 100 lands on the inscribed circle.
pub fn marker_position(hue: f64, saturation: f64, width: f64, height: f64) -> (f64, f64) {
    let radius = saturation / 100.0 * (width / 2.0);
    let h = hue.to_radians();
    (width / 2.0 + radius * h.cos(), height / 2.0 - radius * h.sin())
}
