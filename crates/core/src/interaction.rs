//! Pointer interaction: pixel offsets along a control to normalized values
//! and back.
//!
//! The mapper performs no clamping. Range mapping and rounding into a
//! channel happen in [`PickerState::set_normalized`].

use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::state::{Channel, PickerState};

/// `offset / width`.
pub fn normalize(offset: f64, width: f64) -> f64 {
    offset / width
}

/// `v * width`.
pub fn denormalize(v: f64, width: f64) -> f64 {
    v * width
}

/// How a pointer event was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Discrete click or tap. Always updates.
    Click,
    /// Pointer motion. Updates only while a button is held.
    Move,
}

/// A pointer event as reported by the interaction source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Distance in pixels from the control's left edge.
    pub offset_x: f64,
    /// Whether any pointer button is currently pressed.
    pub buttons_held: bool,
}

/// A horizontal slider bound to one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    channel: Channel,
    width: f64,
}

impl Slider {
    /// Creates a slider `width` pixels wide.
    ///
    /// Returns `PickerError::InvalidDimensions` unless `width` is positive
    /// and finite.
    pub fn new(channel: Channel, width: f64) -> Result<Self, PickerError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(PickerError::InvalidDimensions);
        }
        Ok(Self { channel, width })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Normalized value for `event`, or `None` when the gesture should not
    /// update (a move without a held button).
    pub fn track(&self, gesture: Gesture, event: PointerEvent) -> Option<f64> {
        match gesture {
            Gesture::Click => Some(normalize(event.offset_x, self.width)),
            Gesture::Move if event.buttons_held => Some(normalize(event.offset_x, self.width)),
            Gesture::Move => None,
        }
    }

    /// Tracks `event` and, if it updates, stores it into `state`.
    /// Returns whether the state was written.
    pub fn apply(&self, gesture: Gesture, event: PointerEvent, state: &mut PickerState) -> bool {
        match self.track(gesture, event) {
            Some(v) => {
                state.set_normalized(self.channel, v);
                true
            }
            None => false,
        }
    }

    /// Pixel offset of the handle for the current state.
    pub fn handle_offset(&self, state: &PickerState) -> f64 {
        denormalize(state.normalized(self.channel), self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(offset_x: f64, buttons_held: bool) -> PointerEvent {
        PointerEvent {
            offset_x,
            buttons_held,
        }
    }

    #[test]
    fn round_trip_at_midpoint() {
        let v = normalize(150.0, 300.0);
        assert_eq!(v, 0.5);
        assert_eq!(denormalize(v, 300.0), 150.0);
    }

    #[test]
    fn no_clamping_outside_the_control() {
        assert_eq!(normalize(-30.0, 300.0), -0.1);
        assert_eq!(normalize(450.0, 300.0), 1.5);
    }

    #[test]
    fn click_always_updates() {
        let slider = Slider::new(Channel::Hue, 300.0).unwrap();
        assert_eq!(slider.track(Gesture::Click, event(75.0, false)), Some(0.25));
        assert_eq!(slider.track(Gesture::Click, event(75.0, true)), Some(0.25));
    }

    #[test]
    fn move_updates_only_while_held() {
        let slider = Slider::new(Channel::Light, 300.0).unwrap();
        assert_eq!(slider.track(Gesture::Move, event(30.0, false)), None);
        assert_eq!(slider.track(Gesture::Move, event(30.0, true)), Some(0.1));
    }

    #[test]
    fn apply_writes_floored_channel_value() {
        let slider = Slider::new(Channel::Hue, 300.0).unwrap();
        let mut state = PickerState::default();
        assert!(slider.apply(Gesture::Click, event(75.0, false), &mut state));
        assert_eq!(state.hue, 90.0);

        let before = state;
        assert!(!slider.apply(Gesture::Move, event(200.0, false), &mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn handle_offset_inverts_the_stored_value() {
        let slider = Slider::new(Channel::Saturation, 300.0).unwrap();
        let state = PickerState::new(0.0, 50.0, 80.0);
        assert_eq!(slider.handle_offset(&state), 150.0);
    }

    #[test]
    fn slider_rejects_degenerate_width() {
        assert!(Slider::new(Channel::Hue, 0.0).is_err());
        assert!(Slider::new(Channel::Hue, -10.0).is_err());
        assert!(Slider::new(Channel::Hue, f64::NAN).is_err());
    }
}
