//! Markdown code-fence tracking.

use std::collections::HashMap;
use tracing::trace;

/// True if the line opens or closes a fenced code block.
pub fn is_code_fence(text: &str) -> bool {
    text.trim().starts_with("```")
}

/// Per-file fence toggles for one pass over a diff.
///
/// Files are tracked independently so interleaved lines from different
/// files never pair each other's fences.
#[derive(Debug, Default)]
pub struct FenceTracker {
    open: HashMap<String, bool>,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a line of `file`; returns true if it must not be checked.
    ///
    /// Fence delimiters flip the file's toggle and are skipped themselves.
    pub fn should_skip(&mut self, file: &str, text: &str) -> bool {
        if is_code_fence(text) {
            let open = self.open.entry(file.to_string()).or_default();
            *open = !*open;
            trace!(file, open = *open, "fence: toggled");
            return true;
        }
        self.is_open(file)
    }

    /// Whether `file` is currently inside a fenced block.
    pub fn is_open(&self, file: &str) -> bool {
        self.open.get(file).copied().unwrap_or(false)
    }
}
