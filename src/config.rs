use minitrack_core::StatusOnUpdate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Path to the JSON data file
    pub data_file: ConfigValue<PathBuf>,
    /// Reset painting status to "built" when a unit form is re-submitted
    pub reset_status_on_update: ConfigValue<bool>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_file: Option<PathBuf>,
    reset_status_on_update: Option<bool>,
}

pub const DATA_FILE_ENV: &str = "MINIS_DATA_FILE";
pub const RESET_STATUS_ENV: &str = "MINIS_RESET_STATUS_ON_UPDATE";

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut data_file = ConfigValue::new(
            Self::default_data_dir().join("data.json"),
            ConfigSource::Default,
        );
        let mut reset_status_on_update = ConfigValue::new(false, ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(file_path) = file_config.data_file {
                // Resolve relative paths against config file's directory
                let resolved = if file_path.is_relative() {
                    path.parent()
                        .map(|p| p.join(&file_path))
                        .unwrap_or(file_path)
                } else {
                    file_path
                };
                data_file = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(reset) = file_config.reset_status_on_update {
                reset_status_on_update = ConfigValue::new(reset, ConfigSource::File);
            }
        }

        if let Ok(env_path) = std::env::var(DATA_FILE_ENV) {
            data_file = ConfigValue::new(PathBuf::from(env_path), ConfigSource::Environment);
        }
        if let Ok(raw) = std::env::var(RESET_STATUS_ENV) {
            let reset = parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidEnv(RESET_STATUS_ENV.to_string(), raw))?;
            reset_status_on_update = ConfigValue::new(reset, ConfigSource::Environment);
        }

        tracing::debug!(
            "Using data file {} ({})",
            data_file.value.display(),
            data_file.source
        );

        Ok(Self {
            data_file,
            reset_status_on_update,
            config_file,
        })
    }

    pub fn status_on_update(&self) -> StatusOnUpdate {
        if self.reset_status_on_update.value {
            StatusOnUpdate::ResetToBuilt
        } else {
            StatusOnUpdate::Preserve
        }
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/minis/
    /// - macOS: ~/Library/Application Support/minis/
    /// - Windows: %APPDATA%/minis/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minis")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/minis/
    /// - macOS: ~/Library/Application Support/minis/
    /// - Windows: %APPDATA%/minis/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("minis")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidEnv(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidEnv(var, value) => {
                write!(f, "Invalid value '{}' for {}: expected true or false", value, var)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
