//! Public API for diff parsing.

use crate::error::Result;
use crate::git::stream_git;
use std::path::Path;

use super::parser::parse_added_lines;

/// Represents a single added line from a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Repository-relative path after the change. Empty means the line
    /// belongs to a deleted file and must be dropped.
    pub file: String,
    /// Line number in the new file (1-based).
    pub line_number: usize,
    /// The content of the added line (without leading '+').
    pub text: String,
}

/// Revisions to compare with `git diff`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffRange {
    /// Base revision. `None` compares the index against the working tree.
    pub base: Option<String>,
    /// Head revision. `None` compares `base` against the working tree.
    pub head: Option<String>,
}

impl DiffRange {
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: non_empty(base.into()),
            head: non_empty(head.into()),
        }
    }

    /// Arguments for a colorless, zero-context `git diff`.
    pub fn git_args(&self) -> Vec<String> {
        let mut args = vec![
            "diff".to_string(),
            "--no-color".to_string(),
            "-U0".to_string(),
        ];
        match (&self.base, &self.head) {
            (Some(base), Some(head)) => args.push(format!("{}...{}", base, head)),
            (Some(base), None) => args.push(base.clone()),
            _ => {}
        }
        args
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse the added lines between two revisions.
///
/// Runs `git diff --no-color -U0 {base}...{head}` and streams its output
/// through the parser.
///
/// # Arguments
///
/// * `cwd` - The working directory (anywhere inside the repository)
/// * `range` - The revisions to compare
///
/// # Returns
///
/// * `Ok(Vec<DiffLine>)` - Added lines with file paths and line numbers
/// * `Err(SpellError::DiffSource)` - Git could not run or exited non-zero
/// * `Err(SpellError::MalformedInput)` - Git's output could not be read
pub fn git_added_lines<P: AsRef<Path>>(cwd: P, range: &DiffRange) -> Result<Vec<DiffLine>> {
    let args = range.git_args();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    stream_git(cwd, &args, |stdout| parse_added_lines(stdout))
}
