//! Reactive picker session.
//!
//! A [`Session`] owns the picker state and the last computed [`Frame`].
//! State changes go through [`Session::apply`], which returns the exact set
//! of outputs the change invalidates according to a fixed dependency table;
//! [`Session::recompute`] then re-runs only those samplers. The samplers are
//! independent, so the order they run in does not matter.

use std::collections::BTreeSet;

use tracing::debug;

use crate::color::Srgb;
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::harmony::{additional_hues, harmony_swatches, HarmonyScheme, HarmonySwatch};
use crate::palette::{palette_matrix, PaletteConfig, PaletteMatrix};
use crate::spectrum::{sample_spectrum, SpectrumSample, StripGeometry};
use crate::state::{Channel, PickerState};
use crate::transform::{convert_normalized, TransformKind};
use crate::wheel::{marker_position, sample_wheel, WheelGeometry, WheelPolicy, WheelSample};

/// A value a session output can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Input {
    Channel(Channel),
    Scheme,
    Palette,
    Transform,
    WheelPolicy,
}

/// A derived output cached in the [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Output {
    Wheel,
    Spectrum(Channel),
    Harmonics,
    Palette,
    Current,
}

impl Output {
    /// Every output, in no particular dependency order.
    pub const ALL: [Output; 7] = [
        Output::Wheel,
        Output::Spectrum(Channel::Hue),
        Output::Spectrum(Channel::Saturation),
        Output::Spectrum(Channel::Light),
        Output::Harmonics,
        Output::Palette,
        Output::Current,
    ];
}

/// Outputs invalidated by a change to `input`.
pub fn dependents(input: Input) -> &'static [Output] {
    use Channel::*;
    match input {
        Input::Channel(Hue) => &[
            Output::Spectrum(Saturation),
            Output::Spectrum(Light),
            Output::Harmonics,
            Output::Palette,
            Output::Current,
        ],
        Input::Channel(Saturation) => &[
            Output::Spectrum(Hue),
            Output::Spectrum(Light),
            Output::Harmonics,
            Output::Palette,
            Output::Current,
        ],
        Input::Channel(Light) => &[
            Output::Wheel,
            Output::Spectrum(Hue),
            Output::Spectrum(Saturation),
            Output::Harmonics,
            Output::Palette,
            Output::Current,
        ],
        Input::Scheme => &[Output::Harmonics],
        Input::Palette => &[Output::Palette],
        Input::Transform => &Output::ALL,
        Input::WheelPolicy => &[Output::Wheel],
    }
}

/// The set of outputs that need recomputing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dirty {
    outputs: BTreeSet<Output>,
}

impl Dirty {
    /// Every output.
    pub fn all() -> Self {
        Self {
            outputs: Output::ALL.into_iter().collect(),
        }
    }

    /// Outputs depending on any of `inputs`.
    pub fn from_inputs(inputs: &[Input]) -> Self {
        Self {
            outputs: inputs
                .iter()
                .flat_map(|&i| dependents(i).iter().copied())
                .collect(),
        }
    }

    pub fn contains(&self, output: Output) -> bool {
        self.outputs.contains(&output)
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Output> + '_ {
        self.outputs.iter().copied()
    }

    /// Merges `other` into `self`.
    pub fn extend(&mut self, other: &Dirty) {
        self.outputs.extend(other.outputs.iter().copied());
    }
}

/// A state change request.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Set a channel to a value in its native range.
    Channel(Channel, f64),
    /// Set a channel from a normalized slider position (`floor(v * max)`).
    Normalized(Channel, f64),
    /// Committed text-field edit; ignored unless it parses as an integer.
    Text(Channel, String),
    Scheme(HarmonyScheme),
    Palette(PaletteConfig),
    Transform(TransformKind),
    WheelPolicy(WheelPolicy),
}

/// Every derived output for the current state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub wheel: Vec<WheelSample>,
    pub hue_spectrum: Vec<SpectrumSample>,
    pub saturation_spectrum: Vec<SpectrumSample>,
    pub light_spectrum: Vec<SpectrumSample>,
    pub harmonics: Vec<HarmonySwatch>,
    pub palette: PaletteMatrix,
    pub current: Srgb,
}

impl Frame {
    /// The strip for `channel`.
    pub fn spectrum(&self, channel: Channel) -> &[SpectrumSample] {
        match channel {
            Channel::Hue => &self.hue_spectrum,
            Channel::Saturation => &self.saturation_spectrum,
            Channel::Light => &self.light_spectrum,
        }
    }
}

/// One picker session: state, settings, and the cached frame.
#[derive(Debug, Clone)]
pub struct Session {
    state: PickerState,
    scheme: HarmonyScheme,
    palette: PaletteConfig,
    transform: TransformKind,
    policy: WheelPolicy,
    wheel_geometry: WheelGeometry,
    strip_geometry: StripGeometry,
    frame: Frame,
}

impl Session {
    /// Creates a session from a validated config and computes the first frame.
    pub fn new(config: &PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        let initial = config.initial;
        let mut session = Self {
            state: PickerState::new(initial.hue, initial.saturation, initial.light),
            scheme: config.harmony,
            palette: config.palette,
            transform: config.transform_kind()?,
            policy: config.wheel_policy,
            wheel_geometry: config.wheel,
            strip_geometry: config.spectrum,
            frame: Frame::default(),
        };
        session.recompute(&Dirty::all());
        Ok(session)
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn scheme(&self) -> HarmonyScheme {
        self.scheme
    }

    pub fn palette_config(&self) -> &PaletteConfig {
        &self.palette
    }

    pub fn transform(&self) -> TransformKind {
        self.transform
    }

    pub fn wheel_policy(&self) -> WheelPolicy {
        self.policy
    }

    pub fn wheel_geometry(&self) -> &WheelGeometry {
        &self.wheel_geometry
    }

    pub fn strip_geometry(&self) -> &StripGeometry {
        &self.strip_geometry
    }

    /// The last computed frame. Stale for any output returned by
    /// [`apply`](Self::apply) until [`recompute`](Self::recompute) runs.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Applies `update` to the state and returns the outputs it invalidates.
    ///
    /// Updates that leave every value unchanged return an empty set, as do
    /// text edits that fail to parse. Palette configs are validated first.
    pub fn apply(&mut self, update: Update) -> Result<Dirty, PickerError> {
        let changed = match update {
            Update::Channel(channel, value) => {
                let next = self.state.with(channel, value);
                self.replace_state(next, channel)
            }
            Update::Normalized(channel, v) => {
                let mut next = self.state;
                next.set_normalized(channel, v);
                self.replace_state(next, channel)
            }
            Update::Text(channel, text) => {
                let mut next = self.state;
                if next.commit_text(channel, &text) {
                    self.replace_state(next, channel)
                } else {
                    debug!(%channel, text = %text, "ignoring unparsable field edit");
                    None
                }
            }
            Update::Scheme(scheme) => {
                (self.scheme != scheme).then(|| {
                    self.scheme = scheme;
                    Input::Scheme
                })
            }
            Update::Palette(config) => {
                config.validate()?;
                (self.palette != config).then(|| {
                    self.palette = config;
                    Input::Palette
                })
            }
            Update::Transform(kind) => (self.transform != kind).then(|| {
                self.transform = kind;
                Input::Transform
            }),
            Update::WheelPolicy(policy) => (self.policy != policy).then(|| {
                self.policy = policy;
                Input::WheelPolicy
            }),
        };
        Ok(changed
            .map(|input| Dirty::from_inputs(&[input]))
            .unwrap_or_default())
    }

    fn replace_state(&mut self, next: PickerState, channel: Channel) -> Option<Input> {
        if next.get(channel) == self.state.get(channel) {
            return None;
        }
        self.state = next;
        Some(Input::Channel(channel))
    }

    /// Re-runs the samplers for every output in `dirty`.
    pub fn recompute(&mut self, dirty: &Dirty) {
        if dirty.is_empty() {
            return;
        }
        debug!(outputs = ?dirty.outputs, "recomputing picker outputs");
        let state = self.state;
        let transform = self.transform;
        let t = &transform;
        for output in dirty.iter() {
            match output {
                Output::Wheel => {
                    self.frame.wheel =
                        sample_wheel(&self.wheel_geometry, state.light, self.policy, t);
                }
                Output::Spectrum(channel) => {
                    let samples = sample_spectrum(channel, &state, &self.strip_geometry, t);
                    match channel {
                        Channel::Hue => self.frame.hue_spectrum = samples,
                        Channel::Saturation => self.frame.saturation_spectrum = samples,
                        Channel::Light => self.frame.light_spectrum = samples,
                    }
                }
                Output::Harmonics => {
                    self.frame.harmonics =
                        harmony_swatches(self.scheme, state.hue, state.saturation, state.light, t);
                }
                Output::Palette => {
                    self.frame.palette = palette_matrix(&state, &self.palette, t);
                }
                Output::Current => {
                    self.frame.current =
                        convert_normalized(t, state.hue, state.saturation, state.light);
                }
            }
        }
    }

    /// [`apply`](Self::apply) followed by [`recompute`](Self::recompute).
    pub fn update(&mut self, update: Update) -> Result<Dirty, PickerError> {
        let dirty = self.apply(update)?;
        self.recompute(&dirty);
        Ok(dirty)
    }

    /// Wheel pixel position of the current color.
    pub fn pointer_marker(&self) -> (f64, f64) {
        marker_position(
            self.state.hue,
            self.state.saturation,
            self.wheel_geometry.width as f64,
            self.wheel_geometry.height as f64,
        )
    }

    /// Wheel pixel positions of the harmony hues other than the current one.
    pub fn harmony_markers(&self) -> Vec<(f64, f64)> {
        additional_hues(self.scheme, self.state.hue, 360.0)
            .into_iter()
            .map(|h| {
                marker_position(
                    h,
                    self.state.saturation,
                    self.wheel_geometry.width as f64,
                    self.wheel_geometry.height as f64,
                )
            })
            .collect()
    }
}
