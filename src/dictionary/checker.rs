//! Word lookups against the allow-list and typo dictionary.

use super::allowlist::AllowList;
use super::typos::TypoDictionary;

/// Outcome of checking a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// Not a known typo.
    Clean,
    /// On the allow-list; the dictionary was not consulted.
    Allowed,
    /// A known typo with its suggested corrections.
    Typo(&'a [String]),
}

/// Read-only lookup table built once before checking starts.
#[derive(Debug, Clone, Default)]
pub struct Checker {
    typos: TypoDictionary,
    allowed: AllowList,
}

impl Checker {
    pub fn new(typos: TypoDictionary, allowed: AllowList) -> Self {
        Self { typos, allowed }
    }

    /// Check one word. The allow-list always wins over the dictionary.
    pub fn check(&self, word: &str) -> Verdict<'_> {
        let lower = word.to_lowercase();
        if self.allowed.contains(&lower) {
            return Verdict::Allowed;
        }
        match self.typos.corrections(&lower) {
            Some(corrections) => Verdict::Typo(corrections),
            None => Verdict::Clean,
        }
    }
}
