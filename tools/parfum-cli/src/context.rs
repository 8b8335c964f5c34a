//! CLI execution context.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use parfum_commerce::catalog::Catalog;
use parfum_storefront::StorefrontConfig;
use tracing::debug;

use crate::output::Output;

/// Config file names searched for, in order, in each directory.
const CONFIG_NAMES: [&str; 3] = ["parfum.toml", ".parfum.toml", "parfum.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the config was read from, if any.
    pub config_path: Option<PathBuf>,
    /// The catalog, loaded once for the whole run.
    pub catalog: Cow<'static, Catalog>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load config from an explicit path or by searching upwards from the
    /// working directory. Defaults apply when nothing is found.
    pub fn load_config(config_path: Option<&str>) -> Result<(StorefrontConfig, Option<PathBuf>)> {
        if let Some(path) = config_path {
            let config = StorefrontConfig::load(path)
                .with_context(|| format!("Failed to load config file: {}", path))?;
            return Ok((config, Some(PathBuf::from(path))));
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        match Self::find_config(&cwd) {
            Some(path) => {
                let config = StorefrontConfig::load(&path)
                    .with_context(|| format!("Failed to load config file: {}", path.display()))?;
                Ok((config, Some(path)))
            }
            None => Ok((StorefrontConfig::default(), None)),
        }
    }

    /// Build the context, loading the configured catalog.
    pub fn new(
        config: StorefrontConfig,
        config_path: Option<PathBuf>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let catalog = config.load_catalog().context("Failed to load catalog")?;
        debug!(products = catalog.len(), "Context ready");

        Ok(Self {
            config,
            config_path,
            catalog,
            output,
            cwd,
        })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Where `config init` writes when no `--config` is given.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(CONFIG_NAMES[0])
    }
}
