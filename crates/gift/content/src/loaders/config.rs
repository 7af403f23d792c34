//! Guide configuration loader.

use std::path::Path;

use gift_core::GuideConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for guide configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// A missing file yields [`GuideConfig::default`]; a file that exists but
    /// does not parse is an error.
    pub fn load(path: &Path) -> LoadResult<GuideConfig> {
        if !path.exists() {
            tracing::debug!(file = %path.display(), "no guide config; using defaults");
            return Ok(GuideConfig::default());
        }

        let content = read_file(path)?;
        let config: GuideConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse guide config TOML: {}", e))?;

        Ok(config)
    }
}
