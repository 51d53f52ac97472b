//! Configuration management for RW charts.
//!
//! Parses the `[charts]` section of `rw.toml` with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [charts]
//! id_prefix = "chart"
//!
//! [charts.placeholder]
//! height = "300px"
//! background = "#ffffff"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chart rendering configuration.
    pub charts: ChartsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Chart rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Prefix of generated canvas ids (`{id_prefix}-xxxxxxxxx`).
    pub id_prefix: String,
    /// Styling of the placeholder container that replaces chart code blocks.
    pub placeholder: PlaceholderConfig,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            id_prefix: "chart".to_owned(),
            placeholder: PlaceholderConfig::default(),
        }
    }
}

/// Placeholder container styling.
///
/// Values are CSS fragments inserted into the container's inline style.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// CSS class of the container div.
    pub class: String,
    /// Fixed container height.
    pub height: String,
    pub padding: String,
    pub background: String,
    pub border_radius: String,
    pub shadow: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            class: "chart-container".to_owned(),
            height: "300px".to_owned(),
            padding: "16px".to_owned(),
            background: "#ffffff".to_owned(),
            border_radius: "8px".to_owned(),
            shadow: "0 1px 3px rgba(0, 0, 0, 0.1)".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Reject values that would break out of an HTML attribute.
fn require_attribute_safe(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.contains(['"', '<', '>']) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain quotes or angle brackets"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a value is invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for invalid values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_charts()
    }

    fn validate_charts(&self) -> Result<(), ConfigError> {
        let charts = &self.charts;

        require_non_empty(&charts.id_prefix, "charts.id_prefix")?;
        if !charts
            .id_prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::Validation(
                "charts.id_prefix must contain only ASCII letters, digits or underscores"
                    .to_owned(),
            ));
        }

        let placeholder = &charts.placeholder;
        require_non_empty(&placeholder.class, "charts.placeholder.class")?;
        require_non_empty(&placeholder.height, "charts.placeholder.height")?;
        for (value, field) in [
            (&placeholder.class, "charts.placeholder.class"),
            (&placeholder.height, "charts.placeholder.height"),
            (&placeholder.padding, "charts.placeholder.padding"),
            (&placeholder.background, "charts.placeholder.background"),
            (&placeholder.border_radius, "charts.placeholder.border_radius"),
            (&placeholder.shadow, "charts.placeholder.shadow"),
        ] {
            require_attribute_safe(value, field)?;
        }

        Ok(())
    }
}
