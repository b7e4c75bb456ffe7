//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::diff::DiffRange;
use crate::error::{Result, SpellError};
use crate::extract::ExtractOptions;
use globset::Glob;
use std::io::ErrorKind;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(SpellError::ConfigLoad)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SpellError::ConfigLoad(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from a YAML file, falling back to defaults if it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            _ => Self::load(path),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SpellError::ConfigLoad(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            SpellError::ConfigLoad(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every `exclude` entry must be a valid glob
    /// - `allowlist` and `dictionaries` entries must be non-empty paths
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.exclude {
            Glob::new(pattern).map_err(|e| {
                SpellError::ConfigLoad(format!(
                    "config validation failed: invalid glob pattern in exclude: '{}' - {}",
                    pattern, e
                ))
            })?;
        }

        if self.allowlist.trim().is_empty() {
            return Err(SpellError::ConfigLoad(
                "config validation failed: allowlist must be a non-empty path".to_string(),
            ));
        }

        if self.dictionaries.iter().any(|d| d.trim().is_empty()) {
            return Err(SpellError::ConfigLoad(
                "config validation failed: dictionaries entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Word extraction switches derived from this config.
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            ignore_urls: self.ignore_urls,
            ignore_all_caps: self.ignore_all_caps,
        }
    }

    /// Revisions to hand to `git diff`.
    pub fn diff_range(&self) -> DiffRange {
        DiffRange::new(self.base.as_str(), self.head.as_str())
    }
}
