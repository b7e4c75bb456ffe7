//! Configuration constants and defaults for diffspell.

/// Config file location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".diffspell/config.yaml";

/// Allow-list location relative to the working directory.
pub const DEFAULT_ALLOWLIST_PATH: &str = ".diffspell/allow.txt";

// Default value functions for serde
pub(crate) fn default_base() -> String {
    "origin/main".to_string()
}
pub(crate) fn default_head() -> String {
    "HEAD".to_string()
}
pub(crate) fn default_allowlist() -> String {
    DEFAULT_ALLOWLIST_PATH.to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
