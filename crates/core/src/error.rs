//! Error types for the luv-picker core.
//!
//! The samplers themselves are total functions; errors only arise when
//! geometry, configuration, or user-supplied names are validated.

use thiserror::Error;

/// Errors produced by picker operations.
#[derive(Debug, Error)]
pub enum PickerError {
    /// A grid, strip, or canvas dimension was zero.
    #[error("invalid dimensions: width, height and cell size must be non-zero")]
    InvalidDimensions,

    /// Palette size was outside `[1, 100]`.
    #[error("invalid palette size {0}: expected a value in [1, 100]")]
    InvalidPaletteSize(usize),

    /// A palette variation was outside `[0, 100]`.
    #[error("invalid {name}: {value} is outside [0, 100]")]
    InvalidVariation { name: String, value: f64 },

    /// A harmony scheme name was not recognized.
    #[error("unknown harmony scheme: {0}")]
    UnknownScheme(String),

    /// A channel name was not recognized.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// A color transform name was not recognized.
    #[error("unknown color transform: {0}")]
    UnknownTransform(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A configuration file could not be parsed or failed validation.
    #[error("invalid config: {0}")]
    Config(String),

    /// An I/O operation failed (config read, snapshot write).
    #[error("I/O error: {0}")]
    Io(String),
}
