//! Word scanning with URL, all-caps, and identifier suppression.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|ftp://\S+").expect("url regex is valid"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("word regex is valid"));

/// A candidate word pulled out of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Lowercased spelling.
    pub text: String,
    /// 1-based byte offset of the first letter in the original line.
    pub column: usize,
}

/// Suppression switches for [`extract_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Blank out `http://`, `https://`, and `ftp://` spans before scanning.
    pub ignore_urls: bool,
    /// Drop words written entirely in capitals.
    pub ignore_all_caps: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            ignore_urls: true,
            ignore_all_caps: true,
        }
    }
}

/// Extract checkable words from one line of text.
///
/// Runs of ASCII letters are candidates. A run is dropped when it is a
/// single letter, when it is all capitals and `ignore_all_caps` is set, or
/// when a digit touches it on either side (`utf8`, `v2beta`, `x86_64`).
///
/// # Example
///
/// ```
/// use diffspell::extract::{ExtractOptions, extract_words};
///
/// let words = extract_words("see https://example.com/path for info", &ExtractOptions::default());
/// let texts: Vec<&str> = words.iter().map(|w| w.text.as_str()).collect();
/// assert_eq!(texts, ["see", "for", "info"]);
/// ```
pub fn extract_words(text: &str, options: &ExtractOptions) -> Vec<Word> {
    let scanned = if options.ignore_urls {
        blank_urls(text)
    } else {
        Cow::Borrowed(text)
    };

    WORD.find_iter(&scanned)
        .filter(|m| m.len() >= 2)
        .filter(|m| !(options.ignore_all_caps && is_all_upper(m.as_str())))
        // Digit context comes from the original text, not the blanked copy.
        .filter(|m| !has_adjacent_digit(text, m.start(), m.end()))
        .map(|m| Word {
            text: m.as_str().to_ascii_lowercase(),
            column: m.start() + 1,
        })
        .collect()
}

/// Replace URL spans with spaces of the same byte length.
fn blank_urls(text: &str) -> Cow<'_, str> {
    if !text.contains("://") {
        return Cow::Borrowed(text);
    }
    URL.replace_all(text, |caps: &regex::Captures<'_>| " ".repeat(caps[0].len()))
}

fn is_all_upper(word: &str) -> bool {
    word.bytes()
        .filter(u8::is_ascii_alphabetic)
        .all(|b| b.is_ascii_uppercase())
}

fn has_adjacent_digit(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start > 0 && bytes.get(start - 1).is_some_and(u8::is_ascii_digit);
    let after = bytes.get(end).is_some_and(u8::is_ascii_digit);
    before || after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_urls_preserves_length() {
        let text = "go to https://example.com/a?b=c now";
        let blanked = blank_urls(text);
        assert_eq!(blanked.len(), text.len());
        assert_eq!(&blanked[..6], "go to ");
        assert!(blanked[6..31].chars().all(|c| c == ' '));
        assert_eq!(&blanked[31..], " now");
    }

    #[test]
    fn test_blank_urls_borrows_without_scheme_separator() {
        assert!(matches!(blank_urls("plain words"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_is_all_upper() {
        assert!(is_all_upper("HELLO"));
        assert!(!is_all_upper("Hello"));
        assert!(!is_all_upper("hELLO"));
    }

    #[test]
    fn test_has_adjacent_digit() {
        let text = "utf8 v2beta plain";
        assert!(has_adjacent_digit(text, 0, 3));
        assert!(has_adjacent_digit(text, 5, 6));
        assert!(has_adjacent_digit(text, 7, 11));
        assert!(!has_adjacent_digit(text, 12, 17));
    }
}
