//! Turning added lines into findings.
//!
//! For every added line, in diff order:
//! 1. Drop lines of deleted or excluded files
//! 2. Skip fenced code blocks (tracked per file)
//! 3. Extract candidate words
//! 4. Report words the checker flags as typos

use crate::config::Config;
use crate::diff::DiffLine;
use crate::dictionary::{Checker, Verdict};
use crate::error::{Result, SpellError};
use crate::extract::{ExtractOptions, FenceTracker, extract_words};
use crate::report::Finding;
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};

/// Glob-based filter for files that are never checked.
#[derive(Debug, Clone)]
pub struct PathFilter {
    set: GlobSet,
    patterns: Vec<String>,
}

impl PathFilter {
    /// Compile exclusion globs.
    ///
    /// # Returns
    ///
    /// * `Ok(PathFilter)` - Compiled filter (matches nothing when `patterns` is empty)
    /// * `Err(SpellError::UserError)` - A pattern is not a valid glob
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| {
                SpellError::UserError(format!(
                    "invalid glob pattern in exclude: '{}' - {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        let set = builder
            .build()
            .map_err(|e| SpellError::UserError(format!("failed to compile exclude globs: {}", e)))?;

        Ok(Self {
            set,
            patterns: patterns.to_vec(),
        })
    }

    /// Returns the first pattern matching `path`, if any.
    pub fn matched_pattern(&self, path: &str) -> Option<&str> {
        let matches = self.set.matches(path);
        matches
            .first()
            .and_then(|&i| self.patterns.get(i))
            .map(String::as_str)
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            set: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }
}

/// Everything that decides which words get looked up.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub extract: ExtractOptions,
    pub skip_code_fences: bool,
    pub exclude: PathFilter,
}

impl CheckOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            extract: config.extract_options(),
            skip_code_fences: config.skip_code_fences,
            exclude: PathFilter::new(&config.exclude)?,
        })
    }
}

/// Collect findings for a parsed diff.
///
/// Fence state is scoped to this call, so separate diffs never share it.
pub fn collect_findings(
    lines: &[DiffLine],
    checker: &Checker,
    options: &CheckOptions,
) -> Vec<Finding> {
    let mut fences = FenceTracker::new();
    let mut findings = Vec::new();

    for line in lines {
        if line.file.is_empty() {
            continue;
        }

        if let Some(pattern) = options.exclude.matched_pattern(&line.file) {
            debug!(file = %line.file, pattern, "check: excluded");
            continue;
        }

        if options.skip_code_fences && fences.should_skip(&line.file, &line.text) {
            continue;
        }

        for word in extract_words(&line.text, &options.extract) {
            if let Verdict::Typo(corrections) = checker.check(&word.text) {
                findings.push(Finding {
                    file: line.file.clone(),
                    line: line.line_number,
                    column: word.column,
                    word: word.text,
                    corrections: corrections.to_vec(),
                });
            }
        }
    }

    info!(
        lines = lines.len(),
        findings = findings.len(),
        "check: finished"
    );
    findings
}
