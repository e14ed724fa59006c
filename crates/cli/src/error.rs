//! CLI errors and their exit codes.
//!
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: picker error (bad geometry, bad palette config, invalid config file)
//! - 11: I/O error (config read, PNG write)
//! - 12: input error (unknown scheme, channel, transform or policy name)
//! - 13: serialization error

use luv_picker_core::PickerError;
use std::fmt;

/// Errors produced by CLI commands, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    Picker(PickerError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Picker(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Picker(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                write!(f, "{msg}")
            }
        }
    }
}

impl From<PickerError> for CliError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Io(msg) => CliError::Io(msg),
            name @ (PickerError::UnknownScheme(_)
            | PickerError::UnknownChannel(_)
            | PickerError::UnknownTransform(_)) => CliError::Input(name.to_string()),
            other => CliError::Picker(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            CliError::Picker(PickerError::InvalidDimensions).exit_code(),
            CliError::Io("write failed".into()).exit_code(),
            CliError::Input("bad scheme".into()).exit_code(),
            CliError::Serialization("json fail".into()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn picker_io_routes_to_cli_io() {
        let cli_err = CliError::from(PickerError::Io("disk full".into()));
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn unknown_names_route_to_input() {
        for e in [
            PickerError::UnknownScheme("pentad".into()),
            PickerError::UnknownChannel("alpha".into()),
            PickerError::UnknownTransform("cmyk".into()),
        ] {
            assert_eq!(CliError::from(e).exit_code(), 12);
        }
    }

    #[test]
    fn other_picker_errors_route_to_picker() {
        let cli_err = CliError::from(PickerError::InvalidPaletteSize(0));
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains('0'));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
