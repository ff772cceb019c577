//! Configuration for simplify.
//!
//! Loaded from `.simplify/config.toml` under the project root:
//!
//! ```toml
//! # true, false, ["not", "simplify", ...] or ["simplify", ...]
//! warnings = ["not", "obsolete"]
//!
//! # Pin capabilities instead of probing the running host,
//! # e.g. when compiling for an older Emacs.
//! [capabilities]
//! kill-buffer-optional-arg = false
//! ```
//!
//! A missing file is not an error; every field has a default.

mod warnings;

pub use warnings::{ConfigSource, SharedConfig, WarningConfig};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Error loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default, schemars::JsonSchema)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Enabled warning categories: true, false, ["not", ...] or [...].
    #[serde(deserialize_with = "deserialize_warnings")]
    #[schemars(with = "serde_json::Value")]
    pub warnings: WarningConfig,

    /// Capability id -> pinned value. Pinned capabilities are never probed.
    #[serde(rename = "capabilities")]
    pub capability_overrides: BTreeMap<String, bool>,
}

fn deserialize_warnings<'de, D>(deserializer: D) -> Result<WarningConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    toml::Value::deserialize(deserializer).map(WarningConfig::from)
}

impl SimplifyConfig {
    /// Path of the project config file under `root`.
    pub fn path_for(root: &Path) -> PathBuf {
        root.join(".simplify").join("config.toml")
    }

    /// Load the project config, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_for(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            warnings = ?config.warnings,
            overrides = config.capability_overrides.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// A live handle on the warning selection, seeded from this config.
    pub fn shared_warnings(&self) -> SharedConfig {
        SharedConfig::new(self.warnings.clone())
    }

    pub fn capability_override(&self, id: &str) -> Option<bool> {
        self.capability_overrides.get(id).copied()
    }
}

/// JSON schema of the config file.
pub fn config_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(SimplifyConfig);
    serde_json::to_string_pretty(&schema)
}
