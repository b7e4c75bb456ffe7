//! Word extraction for added lines.
//!
//! Two pieces:
//! - `words`: turns one line into lowercased candidate words with columns
//! - `fence`: skips lines inside Markdown code fences, per file

mod fence;
mod words;


// Re-export public API
pub use fence::{FenceTracker, is_code_fence};
pub use words::{ExtractOptions, Word, extract_words};
