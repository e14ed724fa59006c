//! One-dimensional channel sliders.
//!
//! A strip varies a single channel linearly along its length while the other
//! two channels keep their current values. Position 0 maps to 0 and the far
//! end approaches (but never reaches) the channel's maximum.

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::PickerError;
use crate::state::{Channel, PickerState};
use crate::surface::Surface;
use crate::transform::{convert_normalized, ColorTransform};

/// Pixel geometry of a spectrum strip.
///
/// `block` is the sampling stride: one color is computed every `block`
/// pixels and fills a block of that width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripGeometry {
    pub length: usize,
    pub height: usize,
    #[serde(default = "default_block")]
    pub block: usize,
}

fn default_block() -> usize {
    1
}

impl Default for StripGeometry {
    fn default() -> Self {
        Self {
            length: 300,
            height: 30,
            block: 1,
        }
    }
}

impl StripGeometry {
    /// Creates a validated geometry.
    pub fn new(length: usize, height: usize, block: usize) -> Result<Self, PickerError> {
        let g = Self {
            length,
            height,
            block,
        };
        g.validate()?;
        Ok(g)
    }

    /// Rejects zero length, height, or block.
    pub fn validate(&self) -> Result<(), PickerError> {
        if self.length == 0 || self.height == 0 || self.block == 0 {
            return Err(PickerError::InvalidDimensions);
        }
        Ok(())
    }
}

/// One sampled block of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumSample {
    /// Pixel offset of the block's left edge.
    pub offset: usize,
    /// Block width in pixels; the last block may be narrower.
    pub width: usize,
    /// Value of the varying channel at `offset`.
    pub value: f64,
    pub color: Srgb,
}

/// Value of `channel` at `position` on a strip of `length` pixels:
/// `position * (channel.max() / length)`.
pub fn channel_value(channel: Channel, position: usize, length: usize) -> f64 {
    position as f64 * (channel.max() / length as f64)
}

/// Samples the strip for `channel`, holding the other channels of `state`.
pub fn sample_spectrum(
    channel: Channel,
    state: &PickerState,
    geometry: &StripGeometry,
    transform: &dyn ColorTransform,
) -> Vec<SpectrumSample> {
    let block = geometry.block.max(1);
    (0..geometry.length)
        .step_by(block)
        .map(|offset| {
            let value = channel_value(channel, offset, geometry.length);
            let probe = state.with(channel, value);
            SpectrumSample {
                offset,
                width: block.min(geometry.length - offset),
                value,
                color: convert_normalized(transform, probe.hue, probe.saturation, probe.light),
            }
        })
        .collect()
}

/// Fills one full-height rectangle per sample.
pub fn paint_spectrum(
    samples: &[SpectrumSample],
    geometry: &StripGeometry,
    surface: &mut dyn Surface,
) {
    for s in samples {
        surface.fill_rect(s.offset, 0, s.width, geometry.height, s.color);
    }
}
