//! Table configuration
//!
//! Loaded from a JSON file. Every field is optional; absent fields take
//! the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Severity;
use crate::query::{PageSize, SortDirection, SortSpec, DEFAULT_FILTER_FIELD, DEFAULT_ORDER_BY};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Initial sort field (default: "name")
    #[serde(default = "default_order_by")]
    pub default_order_by: String,

    /// Initial sort direction (default: "asc")
    #[serde(default)]
    pub default_order: SortDirection,

    /// Initial rows per page, one of 5, 10, 25 (default: 5)
    #[serde(default)]
    pub default_page_size: PageSize,

    /// Field searched by the name filter (default: "name")
    #[serde(default = "default_filter_field")]
    pub filter_field: String,

    /// Minimum log severity (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_order_by() -> String {
    DEFAULT_ORDER_BY.to_string()
}

fn default_filter_field() -> String {
    DEFAULT_FILTER_FIELD.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_order_by: default_order_by(),
            default_order: SortDirection::default(),
            default_page_size: PageSize::default(),
            filter_field: default_filter_field(),
            log_level: default_log_level(),
        }
    }
}

impl RosterConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: RosterConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.default_order_by.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_order_by must not be empty".to_string(),
            ));
        }

        if self.filter_field.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "filter_field must not be empty".to_string(),
            ));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed minimum log severity
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level.parse().map_err(ConfigError::Invalid)
    }

    /// Initial sort for a fresh table
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.default_order_by.clone(), self.default_order)
    }
}
