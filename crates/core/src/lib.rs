#![deny(unsafe_code)]
//! Core color-space sampling engine for the luv-picker.
//!
//! Turns picker state (hue, saturation, light) plus harmony and palette
//! settings into concrete colors and pixel-grid samples: the hue/saturation
//! wheel, the channel spectra, harmony hues, and the palette matrix. Color
//! conversion sits behind the [`ColorTransform`] trait (HPLuv, HSLuv and
//! OKLCh ship with the crate) and rasterization behind [`Surface`].

pub mod color;
pub mod config;
pub mod error;
pub mod harmony;
pub mod interaction;
pub mod palette;
pub mod session;
pub mod spectrum;
pub mod state;
pub mod surface;
pub mod transform;
pub mod wheel;

pub use color::Srgb;
pub use config::PickerConfig;
pub use error::PickerError;
pub use harmony::{harmonics, HarmonyScheme};
pub use interaction::{Gesture, PointerEvent, Slider};
pub use palette::{palette_matrix, PaletteConfig, PaletteMatrix};
pub use session::{Dirty, Frame, Session, Update};
pub use spectrum::{sample_spectrum, StripGeometry};
pub use state::{Channel, PickerState};
pub use surface::Surface;
pub use transform::{ColorTransform, TransformKind};
pub use wheel::{sample_wheel, WheelGeometry, WheelPolicy};
