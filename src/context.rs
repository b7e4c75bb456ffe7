//! Working directory resolution for diffspell.
//!
//! Every relative path a run touches (config file, allow-list, extra
//! dictionaries) is resolved against one root directory: the `--repo`
//! directory for `diff`, the current working directory otherwise.

use crate::config::DEFAULT_CONFIG_PATH;
use crate::error::{Result, SpellError};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved root for one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Absolute directory that relative paths are resolved against.
    pub root: PathBuf,
}

impl RunContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            SpellError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd)
    }

    /// Resolve the context from a specific directory, relative to the
    /// current working directory if not absolute.
    pub fn resolve_from<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let root = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            let cwd = env::current_dir().map_err(|e| {
                SpellError::UserError(format!("failed to get current working directory: {}", e))
            })?;
            cwd.join(dir)
        };

        if !root.is_dir() {
            return Err(SpellError::UserError(format!(
                "'{}' is not a directory",
                root.display()
            )));
        }

        Ok(Self { root })
    }

    /// Resolve `path` against the root unless it is already absolute.
    pub fn path<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Location of the config file when `--config` is not given.
    pub fn default_config_path(&self) -> PathBuf {
        self.root.join(DEFAULT_CONFIG_PATH)
    }
}
