//! Picker state: the current hue, saturation and light, and the channel
//! vocabulary shared by the spectrum sliders and the interaction mapper.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::transform::{clamp_percent, wrap_hue};

/// One of the three cylindrical channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Hue,
    Saturation,
    Light,
}

impl Channel {
    /// All channels, in display order.
    pub const ALL: [Channel; 3] = [Channel::Hue, Channel::Saturation, Channel::Light];

    /// Upper end of the channel's native range: 360 for hue, 100 otherwise.
    pub fn max(self) -> f64 {
        match self {
            Channel::Hue => 360.0,
            Channel::Saturation | Channel::Light => 100.0,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Light => "light",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hue" | "h" => Ok(Channel::Hue),
            "saturation" | "s" => Ok(Channel::Saturation),
            "light" | "lightness" | "l" => Ok(Channel::Light),
            _ => Err(PickerError::UnknownChannel(s.to_string())),
        }
    }
}

/// The single shared picker state.
///
/// Hue is kept in [0, 360), saturation and light in [0, 100]. Every setter
/// re-establishes those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerState {
    pub hue: f64,
    pub saturation: f64,
    pub light: f64,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 100.0,
            light: 80.0,
        }
    }
}

impl PickerState {
    /// Creates a state, wrapping hue and clamping saturation/light.
    pub fn new(hue: f64, saturation: f64, light: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp_percent(saturation),
            light: clamp_percent(light),
        }
    }

    /// Current value of `channel`.
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Hue => self.hue,
            Channel::Saturation => self.saturation,
            Channel::Light => self.light,
        }
    }

    /// Stores `value` into `channel`, normalizing it into the channel's range.
    pub fn set(&mut self, channel: Channel, value: f64) {
        match channel {
            Channel::Hue => self.hue = wrap_hue(value),
            Channel::Saturation => self.saturation = clamp_percent(value),
            Channel::Light => self.light = clamp_percent(value),
        }
    }

    /// Returns a copy with `channel` replaced by `value`.
    pub fn with(mut self, channel: Channel, value: f64) -> Self {
        self.set(channel, value);
        self
    }

    /// Stores a normalized slider position `v` as `floor(v * channel.max())`.
    pub fn set_normalized(&mut self, channel: Channel, v: f64) {
        self.set(channel, (v * channel.max()).floor());
    }

    /// Current value of `channel` as a fraction of its range.
    pub fn normalized(&self, channel: Channel) -> f64 {
        self.get(channel) / channel.max()
    }

    /// Applies a committed text-field edit.
    ///
    /// Text that does not parse as an integer leaves the state untouched and
    /// returns `false`.
    pub fn commit_text(&mut self, channel: Channel, text: &str) -> bool {
        match text.trim().parse::<i64>() {
            Ok(v) => {
                self.set(channel, v as f64);
                true
            }
            Err(_) => false,
        }
    }
}
