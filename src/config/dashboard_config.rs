//! Dashboard Configuration - operator-tunable TOML values
//!
//! Each struct implements `Default` with the values the dashboard ships
//! with, so the application runs unchanged when no config file is present.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use crate::types::Pollutant;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "AQI_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "aqi_config.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a dashboard deployment.
///
/// Load with `DashboardConfig::load()` which searches:
/// 1. `$AQI_CONFIG` env var
/// 2. `./aqi_config.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Model artifact locations
    #[serde(default)]
    pub models: ModelsConfig,

    /// Slider ranges and starting values
    #[serde(default)]
    pub inputs: InputLimits,

    /// Downloadable report settings
    #[serde(default)]
    pub report: ReportConfig,
}

impl DashboardConfig {
    /// Load configuration using the standard search order:
    /// 1. `$AQI_CONFIG` environment variable
    /// 2. `./aqi_config.toml` in the current working directory
    /// 3. Built-in defaults
    pub fn load() -> Self {
        // 1. Check env var
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded dashboard config from AQI_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from AQI_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "AQI_CONFIG points to non-existent file, falling back");
            }
        }

        // 2. Check ./aqi_config.toml
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded dashboard config from ./aqi_config.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./aqi_config.toml, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No aqi_config.toml found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate TOML text. Unknown keys are logged, not rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Save config to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Dashboard config saved");
        Ok(())
    }

    /// Validate ranges and model entries.
    ///
    /// Suspicious-but-legal values are logged as warnings; impossible values
    /// fail with `ConfigError::Validation`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (errors, warnings) = super::validation::validate_ranges(self);
        for w in &warnings {
            warn!("{}", w);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Validation(errors) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Server
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, e.g. `0.0.0.0:8080`
    #[serde(default = "default_server_addr")]
    pub addr: String,
}

fn default_server_addr() -> String {
    defaults::SERVER_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_server_addr(),
        }
    }
}

// ============================================================================
// Models
// ============================================================================

/// One known model: display name and artifact file relative to `models.dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Directory holding the artifact files
    #[serde(default = "default_models_dir")]
    pub dir: PathBuf,

    /// Known models, in dashboard order
    #[serde(default = "default_model_entries")]
    pub entries: Vec<ModelEntry>,
}

fn default_models_dir() -> PathBuf {
    PathBuf::from(defaults::MODELS_DIR)
}

fn default_model_entries() -> Vec<ModelEntry> {
    defaults::MODEL_FILES
        .iter()
        .map(|(name, file)| ModelEntry {
            name: (*name).to_string(),
            file: (*file).to_string(),
        })
        .collect()
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_models_dir(),
            entries: default_model_entries(),
        }
    }
}

// ============================================================================
// Input Sliders
// ============================================================================

/// Slider range for one pollutant sub-index. The minimum is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub max: f64,
    pub default: f64,
}

/// Slider ranges for the four inputs.
///
/// These bound the UI controls only. Readings above `max` are still
/// predicted (with a warning), since the models extrapolate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    #[serde(default = "default_co_range")]
    pub co: SliderRange,
    #[serde(default = "default_no2_range")]
    pub no2: SliderRange,
    #[serde(default = "default_ozone_range")]
    pub ozone: SliderRange,
    #[serde(default = "default_pm25_range")]
    pub pm25: SliderRange,
}

fn default_co_range() -> SliderRange {
    SliderRange { max: defaults::CO_MAX, default: defaults::CO_DEFAULT }
}
fn default_no2_range() -> SliderRange {
    SliderRange { max: defaults::NO2_MAX, default: defaults::NO2_DEFAULT }
}
fn default_ozone_range() -> SliderRange {
    SliderRange { max: defaults::OZONE_MAX, default: defaults::OZONE_DEFAULT }
}
fn default_pm25_range() -> SliderRange {
    SliderRange { max: defaults::PM25_MAX, default: defaults::PM25_DEFAULT }
}

impl InputLimits {
    pub fn range_for(&self, pollutant: Pollutant) -> SliderRange {
        match pollutant {
            Pollutant::Co => self.co,
            Pollutant::No2 => self.no2,
            Pollutant::Ozone => self.ozone,
            Pollutant::Pm25 => self.pm25,
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            co: default_co_range(),
            no2: default_no2_range(),
            ozone: default_ozone_range(),
            pm25: default_pm25_range(),
        }
    }
}

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// File name offered for the report download
    #[serde(default = "default_report_file_name")]
    pub file_name: String,
}

fn default_report_file_name() -> String {
    defaults::REPORT_FILE_NAME.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_name: default_report_file_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.server.addr, "0.0.0.0:8080");
        assert_eq!(config.models.entries.len(), 4);
        assert_eq!(config.models.entries[0].name, "XGBoost Regressor");
        assert_eq!(config.models.entries[0].file, "best_model.json");
        assert_eq!(config.inputs.pm25, SliderRange { max: 500.0, default: 120.0 });
        assert_eq!(config.report.file_name, "AQI_Prediction_Report.txt");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
[server]
addr = "127.0.0.1:9000"

[inputs.co]
max = 250.0
default = 40.0
"#,
        )
        .unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:9000");
        assert_eq!(config.inputs.co.max, 250.0);
        assert_eq!(config.inputs.no2.max, 400.0);
        assert_eq!(config.models.entries.len(), 4);
    }

    #[test]
    fn test_custom_model_entries_replace_defaults() {
        let config = DashboardConfig::from_toml_str(
            r#"
[models]
dir = "/opt/aqi/models"

[[models.entries]]
name = "Ridge Regression"
file = "ridge_v2.json"
"#,
        )
        .unwrap();
        assert_eq!(config.models.dir, PathBuf::from("/opt/aqi/models"));
        assert_eq!(config.models.entries.len(), 1);
        assert_eq!(config.models.entries[0].file, "ridge_v2.json");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = DashboardConfig::from_toml_str(
            r#"
[inputs.pm25]
max = 100.0
default = 120.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DashboardConfig::default();
        let text = config.to_toml().unwrap();
        let back = DashboardConfig::from_toml_str(&text).unwrap();
        assert_eq!(back.models.entries, config.models.entries);
        assert_eq!(back.inputs, config.inputs);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aqi_config.toml");
        let mut config = DashboardConfig::default();
        config.report.file_name = "report.txt".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = DashboardConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.report.file_name, "report.txt");
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[server\naddr = 1").unwrap();
        let err = DashboardConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
