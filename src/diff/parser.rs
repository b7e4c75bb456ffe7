//! Core diff parsing logic.
//!
//! The parser is a small state machine over the diff's lines. Its state is
//! the current file, the running new-side line number, and whether a hunk
//! header has been seen since the last file change.

use crate::error::{Result, SpellError};
use std::io::BufRead;
use tracing::{debug, trace};

use super::api::DiffLine;
use super::helpers::{parse_hunk_header, parse_new_file_path};
use super::reader::LineReader;

/// Line-by-line state of a unified diff scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiffParser {
    /// File the following lines belong to; `None` before any `+++` line and
    /// for deleted files.
    current_file: Option<String>,
    /// New-side line number the next added or context line will carry.
    line_number: usize,
    /// True once a hunk header was seen for the current file.
    in_hunk: bool,
}

impl DiffParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn in_hunk(&self) -> bool {
        self.in_hunk
    }

    /// Feed one raw diff line, returning the record it produces, if any.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(DiffLine))` - The line was an added line of a live file
    /// * `Ok(None)` - Header, removal, context, or ignored line
    /// * `Err(SpellError::MalformedInput)` - The new-side line number ran past `usize::MAX`
    pub fn feed(&mut self, line: &str) -> Result<Option<DiffLine>> {
        // Format: "diff --git a/path b/path" (or any "diff " header)
        if line.starts_with("diff ") {
            self.reset();
            return Ok(None);
        }

        // Format: "+++ b/path/to/file" or "+++ /dev/null"
        if let Some(rest) = line.strip_prefix("+++ ") {
            self.enter_file(rest);
            return Ok(None);
        }

        // Format: "@@ -old_start,old_len +new_start,new_len @@ optional context"
        if let Some(new_start) = parse_hunk_header(line) {
            self.enter_hunk(new_start);
            return Ok(None);
        }

        if !self.in_hunk || self.current_file.is_none() {
            return Ok(None);
        }

        if let Some(text) = line.strip_prefix('+') {
            if !text.starts_with("++") {
                return self.take_added(text);
            }
        } else if line.starts_with('-') || line.starts_with('\\') {
            // Removed line or "\ No newline at end of file"
            return Ok(None);
        }

        // Context line, or a "+++" lookalike without the trailing space
        self.skip_context()?;
        Ok(None)
    }

    /// Forget everything about the previous file.
    pub fn reset(&mut self) {
        self.current_file = None;
        self.line_number = 0;
        self.in_hunk = false;
    }

    /// Switch to the file named by a `+++` line (marker already stripped).
    pub fn enter_file(&mut self, rest: &str) {
        self.current_file = parse_new_file_path(rest);
        self.in_hunk = false;
        trace!(file = ?self.current_file, "diff: entered file");
    }

    /// Start a hunk whose new side begins at `new_start`.
    pub fn enter_hunk(&mut self, new_start: usize) {
        self.line_number = new_start;
        self.in_hunk = true;
    }

    /// Record an added line (leading `+` already stripped) and advance.
    pub fn take_added(&mut self, text: &str) -> Result<Option<DiffLine>> {
        let Some(file) = self.current_file.clone() else {
            return Ok(None);
        };
        let added = DiffLine {
            file,
            line_number: self.line_number,
            text: text.to_string(),
        };
        self.advance()?;
        Ok(Some(added))
    }

    /// Advance past an unchanged context line.
    pub fn skip_context(&mut self) -> Result<()> {
        self.advance()
    }

    fn advance(&mut self) -> Result<()> {
        self.line_number = self.line_number.checked_add(1).ok_or_else(|| {
            SpellError::MalformedInput(format!(
                "line number overflow after line {} of '{}'",
                self.line_number,
                self.current_file.as_deref().unwrap_or_default()
            ))
        })?;
        Ok(())
    }
}

/// Parse added lines from a reader yielding unified diff text.
///
/// # Returns
///
/// * `Ok(Vec<DiffLine>)` - Added lines in diff order
/// * `Err(SpellError::MalformedInput)` - The reader failed, a line was oversized, or
///   a hunk's line numbers overflowed
pub fn parse_added_lines<R: BufRead>(reader: R) -> Result<Vec<DiffLine>> {
    let mut lines = LineReader::new(reader);
    let mut parser = DiffParser::new();
    let mut result = Vec::new();

    while let Some(line) = lines.next_line()? {
        if let Some(added) = parser.feed(&line)? {
            result.push(added);
        }
    }

    debug!(added = result.len(), "diff: parsed added lines");
    Ok(result)
}

/// Parse added lines from raw diff output string.
pub fn parse_added_lines_from_diff(diff_output: &str) -> Result<Vec<DiffLine>> {
    parse_added_lines(diff_output.as_bytes())
}
