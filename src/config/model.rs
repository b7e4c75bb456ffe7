//! Config struct definition and default implementation.

use super::types::*;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};

/// Configuration for a diffspell run.
///
/// This struct represents the contents of `.diffspell/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff source
    // =========================================================================
    /// Base revision for `diffspell diff`.
    #[serde(default = "default_base")]
    pub base: String,

    /// Head revision for `diffspell diff`. Empty compares `base` against the
    /// working tree.
    #[serde(default = "default_head")]
    pub head: String,

    // =========================================================================
    // Output
    // =========================================================================
    /// Output format for findings.
    #[serde(default)]
    pub format: OutputFormat,

    // =========================================================================
    // Word lists
    // =========================================================================
    /// Allow-list file; a missing file is treated as empty.
    #[serde(default = "default_allowlist")]
    pub allowlist: String,

    /// Extra allowed words, merged into the allow-list.
    #[serde(default)]
    pub allow: Vec<String>,

    /// Extra dictionary files merged over the builtin dictionary, in order.
    #[serde(default)]
    pub dictionaries: Vec<String>,

    // =========================================================================
    // Filtering
    // =========================================================================
    /// Glob patterns for files that are never checked.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Skip `http://`, `https://`, and `ftp://` links.
    #[serde(default = "default_true")]
    pub ignore_urls: bool,

    /// Skip words written entirely in capitals.
    #[serde(default = "default_true")]
    pub ignore_all_caps: bool,

    /// Skip lines inside Markdown code fences.
    #[serde(default = "default_true")]
    pub skip_code_fences: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: default_base(),
            head: default_head(),
            format: OutputFormat::default(),
            allowlist: default_allowlist(),
            allow: Vec::new(),
            dictionaries: Vec::new(),
            exclude: Vec::new(),
            ignore_urls: default_true(),
            ignore_all_caps: default_true(),
            skip_code_fences: default_true(),
        }
    }
}
