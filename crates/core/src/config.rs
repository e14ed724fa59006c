//! Picker configuration: canvas geometry, wheel policy, transform choice and
//! the initial state, loaded from a JSON file.

use std::{env, fs, io::ErrorKind, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::PickerError;
use crate::harmony::HarmonyScheme;
use crate::palette::PaletteConfig;
use crate::spectrum::StripGeometry;
use crate::state::PickerState;
use crate::transform::TransformKind;
use crate::wheel::{WheelGeometry, WheelPolicy};

/// Default location on disk for the JSON configuration.
pub const DEFAULT_CONFIG_PATH: &str = "luv-picker.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "LUV_PICKER_CONFIG";

/// Everything a session needs besides user interaction.
///
/// Missing fields take their defaults, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
    pub wheel: WheelGeometry,
    pub wheel_policy: WheelPolicy,
    pub spectrum: StripGeometry,
    /// Pixel size of one palette swatch when the matrix is rasterized.
    pub palette_cell_size: usize,
    pub transform: String,
    pub initial: PickerState,
    pub harmony: HarmonyScheme,
    pub palette: PaletteConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            wheel: WheelGeometry::default(),
            wheel_policy: WheelPolicy::default(),
            spectrum: StripGeometry::default(),
            palette_cell_size: 40,
            transform: "hpluv".to_string(),
            initial: PickerState::default(),
            harmony: HarmonyScheme::default(),
            palette: PaletteConfig::default(),
        }
    }
}

impl PickerConfig {
    /// Reads and validates the config at `path`.
    pub fn load(path: &Path) -> Result<Self, PickerError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PickerError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&contents)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PickerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from [`CONFIG_PATH_ENV`] or [`DEFAULT_CONFIG_PATH`], falling back
    /// to built-in defaults when the file is missing or invalid.
    pub fn load_default() -> Self {
        Self::load_from(&resolve_config_path())
    }

    /// Loads `path`, falling back to built-in defaults when the file is
    /// missing, unreadable or invalid.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded picker config");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "config file not found; using built-in defaults");
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Checks geometry, palette bounds and the transform name.
    pub fn validate(&self) -> Result<(), PickerError> {
        self.wheel.validate()?;
        self.spectrum.validate()?;
        self.palette.validate()?;
        if self.palette_cell_size == 0 {
            return Err(PickerError::InvalidDimensions);
        }
        self.transform_kind()?;
        Ok(())
    }

    /// The configured transform.
    pub fn transform_kind(&self) -> Result<TransformKind, PickerError> {
        TransformKind::from_name(&self.transform)
    }
}

fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = PickerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.transform_kind().unwrap(), TransformKind::Hpluv);
        assert_eq!(config.wheel.cols(), 75);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{
            "wheel_policy": "mask",
            "harmony": "triad",
            "palette": {"size": 3, "saturation_variation": 10, "light_variation": 20}
        }"#;
        let config = PickerConfig::from_json(json).unwrap();
        assert_eq!(config.wheel_policy, WheelPolicy::Mask);
        assert_eq!(config.harmony, HarmonyScheme::Triad);
        assert_eq!(config.palette.size, 3);
        assert_eq!(config.spectrum, StripGeometry::default());
    }

    #[test]
    fn invalid_palette_is_rejected() {
        let result = PickerConfig::from_json(
            r#"{"palette": {"size": 0, "saturation_variation": 10, "light_variation": 20}}"#,
        );
        assert!(matches!(result, Err(PickerError::InvalidPaletteSize(0))));
    }

    #[test]
    fn unknown_transform_is_rejected() {
        let result = PickerConfig::from_json(r#"{"transform": "cmyk"}"#);
        assert!(matches!(result, Err(PickerError::UnknownTransform(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = PickerConfig::from_json(r#"{"colour": "red"}"#);
        assert!(matches!(result, Err(PickerError::Config(_))));
    }

    #[test]
    fn zero_geometry_is_rejected() {
        let result = PickerConfig::from_json(
            r#"{"wheel": {"width": 300, "height": 300, "cell_size": 0}}"#,
        );
        assert!(matches!(result, Err(PickerError::InvalidDimensions)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"transform": "oklch"}}"#).unwrap();
        let config = PickerConfig::load(file.path()).unwrap();
        assert_eq!(config.transform_kind().unwrap(), TransformKind::OkLch);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PickerConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(PickerError::Io(_))));
    }

    #[test]
    fn load_from_reads_a_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"harmony": "square", "wheel_policy": "mask"}}"#).unwrap();
        let config = PickerConfig::load_from(file.path());
        assert_eq!(config.harmony, HarmonyScheme::Square);
        assert_eq!(config.wheel_policy, WheelPolicy::Mask);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PickerConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn load_from_garbage_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert_eq!(PickerConfig::load_from(file.path()), PickerConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"palette": {{"size": 500, "saturation_variation": 1, "light_variation": 1}}}}"#
        )
        .unwrap();
        assert_eq!(PickerConfig::load_from(file.path()), PickerConfig::default());
    }

    #[test]
    fn env_variable_overrides_config_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"transform": "hsluv"}}"#).unwrap();
        env::set_var(CONFIG_PATH_ENV, file.path());
        let resolved = resolve_config_path();
        let config = PickerConfig::load_default();
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(resolved, file.path());
        assert_eq!(config.transform_kind().unwrap(), TransformKind::Hsluv);
    }

    #[test]
    fn config_json_round_trip() {
        let config = PickerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }
}
