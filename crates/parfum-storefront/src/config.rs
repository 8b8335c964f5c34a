//! Storefront configuration.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;

use parfum_commerce::catalog::Catalog;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{StorefrontError, StorefrontResult};

/// Top-level storefront configuration.
///
/// Every section falls back to its defaults, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Hero carousel settings.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log filter and output format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hero carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Milliseconds between automatic slide advances.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    5000
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl CarouselConfig {
    /// The advance interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with an array of products. The shipped catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines (for development).
    #[default]
    Human,
    /// JSON lines (for log aggregation).
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `parfum_storefront=debug`.
    #[serde(default = "default_filter")]
    pub filter: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> StorefrontResult<Self> {
        let path = path.as_ref();
        let content = read_file(path)?;

        let config = if is_json(path) {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> StorefrontResult<Self> {
        toml::from_str(content).map_err(|e| StorefrontError::ConfigFormat(e.to_string()))
    }

    /// Parse config from JSON text.
    pub fn from_json_str(content: &str) -> StorefrontResult<Self> {
        serde_json::from_str(content).map_err(|e| StorefrontError::ConfigFormat(e.to_string()))
    }

    /// Render config as TOML.
    pub fn to_toml_string(&self) -> StorefrontResult<String> {
        toml::to_string_pretty(self).map_err(|e| StorefrontError::ConfigFormat(e.to_string()))
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> StorefrontResult<()> {
        if self.carousel.interval_ms == 0 {
            return Err(StorefrontError::InvalidConfig(
                "carousel.interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(StorefrontError::InvalidConfig(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the configured catalog.
    ///
    /// Called once at startup; the result is never reloaded.
    pub fn load_catalog(&self) -> StorefrontResult<Cow<'static, Catalog>> {
        match &self.catalog.path {
            None => Ok(Cow::Borrowed(Catalog::shipped())),
            Some(path) => {
                let content = read_file(path)?;
                let catalog = Catalog::from_json(&content)?;
                info!(path = %path.display(), products = catalog.len(), "Loaded catalog file");
                Ok(Cow::Owned(catalog))
            }
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

fn read_file(path: &Path) -> StorefrontResult<String> {
    std::fs::read_to_string(path).map_err(|source| StorefrontError::Io {
        path: path.to_path_buf(),
        source,
    })
}
