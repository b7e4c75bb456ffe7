//! Known-typo dictionary.

use crate::error::{Result, SpellError};
use std::collections::HashMap;
use std::path::Path;

/// Builtin English typo list, embedded at compile time.
const BUILTIN: &str = include_str!("en-basic.txt");

/// Mapping from a lowercased typo to its suggested corrections.
///
/// Every stored entry has at least one correction.
#[derive(Debug, Clone, Default)]
pub struct TypoDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl TypoDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded dictionary.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN)
    }

    /// Parse dictionary text, skipping anything that is not a usable entry.
    ///
    /// Format, one entry per line:
    /// ```text
    /// # comment
    /// recieve -> receive
    /// withing -> within, with
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut dict = Self::new();
        dict.merge_str(text);
        dict
    }

    /// Merge entries from dictionary text; later entries replace earlier ones.
    ///
    /// Returns the number of entries read.
    pub fn merge_str(&mut self, text: &str) -> usize {
        let mut merged = 0;
        for line in text.lines() {
            if let Some((typo, corrections)) = parse_entry(line) {
                self.entries.insert(typo, corrections);
                merged += 1;
            }
        }
        merged
    }

    /// Merge a user-supplied dictionary file.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of entries read
    /// * `Err(SpellError::ConfigLoad)` - The file could not be read
    pub fn merge_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SpellError::ConfigLoad(format!(
                "failed to read dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(self.merge_str(&content))
    }

    /// Corrections for `word` if it is a known typo. `word` must be lowercase.
    pub fn corrections(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one `typo -> a, b` line.
fn parse_entry(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (typo, rest) = line.split_once("->")?;
    let typo = typo.trim().to_lowercase();
    if typo.is_empty() {
        return None;
    }

    let corrections: Vec<String> = rest
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect();

    if corrections.is_empty() {
        None
    } else {
        Some((typo, corrections))
    }
}
