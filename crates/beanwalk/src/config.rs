//! Builder configuration
//!
//! ```toml
//! min_collection_size = 1
//! max_collection_size = 5
//! seed = 42
//! ```

use crate::error::{BeanError, Result};
use crate::generator::CollectionSize;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for [`BeanBuilder`](crate::BeanBuilder)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Smallest generated container size (inclusive)
    pub min_collection_size: usize,
    /// Container size upper bound (exclusive)
    pub max_collection_size: usize,
    /// RNG seed; unseeded builders draw from entropy
    pub seed: Option<u64>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        let sizes = CollectionSize::default();
        Self {
            min_collection_size: sizes.min,
            max_collection_size: sizes.max,
            seed: None,
        }
    }
}

impl BuilderConfig {
    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Save to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BeanError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_collection_size >= self.max_collection_size {
            return Err(BeanError::Config(format!(
                "min_collection_size ({}) must be below max_collection_size ({})",
                self.min_collection_size, self.max_collection_size
            )));
        }
        Ok(())
    }

    pub fn collection_size(&self) -> CollectionSize {
        CollectionSize::new(self.min_collection_size, self.max_collection_size)
    }
}
