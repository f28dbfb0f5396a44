//! Policy configuration loader.

use std::path::Path;

use tcg_core::PolicyConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for policy configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing PolicyConfig
    ///
    /// # Returns
    ///
    /// Returns a PolicyConfig. Missing tables fall back to the built-in defaults.
    pub fn load(path: &Path) -> LoadResult<PolicyConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<PolicyConfig> {
        let config: PolicyConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}
