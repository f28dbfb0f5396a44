//! Content factory for building oracles from a data directory.

use std::path::PathBuf;

use tcg_core::PolicyConfig;

use crate::loaders::{CardCatalog, CardLoader, ConfigLoader, LoadResult};

/// Content factory that loads match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── policy.toml       (optional)
/// └── characters.ron    (optional)
/// ```
///
/// Missing files fall back to the built-in content.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load policy configuration from `policy.toml`.
    pub fn load_config(&self) -> LoadResult<PolicyConfig> {
        let path = self.data_dir.join("policy.toml");
        if !path.exists() {
            return Ok(PolicyConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the character catalog from `characters.ron`.
    pub fn load_cards(&self) -> LoadResult<CardCatalog> {
        let path = self.data_dir.join("characters.ron");
        if !path.exists() {
            return CardCatalog::load();
        }
        CardLoader::load(&path)
    }
}
