//! Diff parsing primitives for diffspell.
//!
//! Turns unified diff text into the lines that were added in the head
//! revision, each attributed to its file and new-side line number.
//!
//! The parsing is deterministic and supports:
//! - Multiple files per diff, each with its own line counter
//! - New files (from /dev/null) and deleted files (to /dev/null)
//! - Zero-context (`-U0`) and context diffs
//! - Binary files and files without hunks (no output, no error)
//! - Streaming input with a bounded line length

mod api;
mod helpers;
mod parser;
mod reader;


// Re-export public API
pub use api::{DiffLine, DiffRange, git_added_lines};
pub use parser::{DiffParser, parse_added_lines, parse_added_lines_from_diff};
pub use reader::MAX_LINE_BYTES;
