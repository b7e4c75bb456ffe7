//! Allow-list of words that are never reported.

use crate::error::{Result, SpellError};
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

/// Lowercased words exempt from typo reporting.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    words: HashSet<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse allow-list text: one word per line, `#` comments, blanks ignored.
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();
        list.extend(
            text.lines()
                .map(str::trim)
                .filter(|w| !w.is_empty() && !w.starts_with('#')),
        );
        list
    }

    /// Load an allow-list file.
    ///
    /// A missing file is an empty list, not an error.
    ///
    /// # Returns
    ///
    /// * `Ok(AllowList)` - Parsed list (empty when the file does not exist)
    /// * `Err(SpellError::ConfigLoad)` - The file exists but could not be read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(SpellError::ConfigLoad(format!(
                "failed to read allowlist '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    /// Add words, lowercasing them.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
