use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV_VAR: &str = "SGE_CONFIG";

/// Window and loop settings. Fixed once the loop is running.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoopConfig {
    pub width: u32,
    pub height: u32,
    /// Integer multiplier applied to `width`/`height` for the window surface.
    pub scale: u32,
    pub title: String,
    pub show_frame_rate: bool,
    pub vertical_sync: bool,
    pub visible: bool,
    pub resizable: bool,
    pub clear_color: [u8; 4],
    pub metrics_log_interval_ms: u64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 1,
            title: "Game".to_string(),
            show_frame_rate: true,
            vertical_sync: true,
            visible: true,
            resizable: true,
            clear_color: [255, 0, 0, 0],
            metrics_log_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {message}")]
    Parse { path: String, message: String },
    #[error("config field {field} must be greater than zero")]
    ZeroField { field: &'static str },
}

impl LoopConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let config: LoopConfig = serde_path_to_error::deserialize(&mut deserializer).map_err(
            |error| {
                let path = error.path().to_string();
                ConfigError::Parse {
                    path,
                    message: error.into_inner().to_string(),
                }
            },
        )?;
        deserializer.end().map_err(|error| ConfigError::Parse {
            path: String::new(),
            message: error.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("scale", self.scale),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroField { field });
            }
        }
        Ok(())
    }

    /// Size of the created window: the logical buffer size times `scale`.
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.scale),
            self.height.saturating_mul(self.scale),
        )
    }

    pub fn metrics_log_interval(&self) -> Duration {
        Duration::from_millis(self.metrics_log_interval_ms)
    }
}

pub fn load_config(path: &Path) -> Result<LoopConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    LoopConfig::from_json_str(&raw)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = LoopConfig::from_json_str("{}").expect("config");
        assert_eq!(config, LoopConfig::default());
        assert_eq!(config.surface_size(), (800, 600));
    }

    #[test]
    fn scale_multiplies_surface_size() {
        let config = LoopConfig::from_json_str(
            r#"{ "width": 200, "height": 200, "scale": 4, "title": "Tiny" }"#,
        )
        .expect("config");

        assert_eq!(config.surface_size(), (800, 800));
        assert_eq!(config.title, "Tiny");
        assert!(config.vertical_sync);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let error = LoopConfig::from_json_str(r#"{ "scale": 0 }"#).expect_err("zero scale");
        assert!(matches!(error, ConfigError::ZeroField { field: "scale" }));
    }

    #[test]
    fn parse_error_reports_field_path() {
        let error =
            LoopConfig::from_json_str(r#"{ "width": "wide" }"#).expect_err("bad width type");
        match error {
            ConfigError::Parse { path, .. } => assert_eq!(path, "width"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_content_is_rejected() {
        let error = LoopConfig::from_json_str("{} {}").expect_err("trailing object");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(LoopConfig::from_json_str(r#"{ "fullscreen": true }"#).is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{ "show_frame_rate": false, "vertical_sync": false, "clear_color": [0, 0, 0, 255] }}"#
        )
        .expect("write config");

        let config = load_config(file.path()).expect("config");
        assert!(!config.show_frame_rate);
        assert!(!config.vertical_sync);
        assert_eq!(config.clear_color, [0, 0, 0, 255]);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.json");
        let error = load_config(&missing).expect_err("missing file");
        assert!(matches!(error, ConfigError::Read { path, .. } if path == missing));
    }
}
