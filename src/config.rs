//! Configuration for forest building and the filter backend
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! forest:
//!   max_tree_count: 10
//! filter:
//!   max_num_keys: 5000
//! ```

use crate::error::{TragError, TragResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Limits applied while building an entity forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Maximum number of trees kept
    pub max_tree_count: usize,
    /// Maximum number of nodes across all kept trees
    pub max_node_count: usize,
    /// Lowercase entity names before building
    pub lowercase: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            max_tree_count: 30,
            max_node_count: 1000,
            lowercase: true,
        }
    }
}

/// Sizing of the membership filter backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub max_num_keys: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_num_keys: 100_000,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TragConfig {
    pub forest: ForestConfig,
    pub filter: FilterConfig,
}

impl TragConfig {
    /// Parse YAML, rejecting limits of zero
    pub fn from_yaml_str(yaml: &str) -> TragResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> TragResult<Self> {
        Self::from_yaml_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> TragResult<()> {
        if self.forest.max_tree_count == 0 {
            return Err(TragError::Config("forest.max_tree_count must be positive".into()));
        }
        if self.filter.max_num_keys == 0 {
            return Err(TragError::Config("filter.max_num_keys must be positive".into()));
        }
        Ok(())
    }
}
