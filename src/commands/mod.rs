//! Command implementations for diffspell.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the pieces every command shares: loading settings,
//! choosing an output format, and turning added lines into a report.

mod check;
mod diff;
mod settings;
mod show_config;
mod word;


pub use settings::Settings;

use crate::check::collect_findings;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::diff::DiffLine;
use crate::error::{Result, SpellError};
use crate::exit_codes;
use crate::report::{OutputFormat, write_findings};
use std::io::Write;
use tracing::debug;

/// Verdict of a command that completed without an operational error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report.
    Clean,
    /// At least one typo was reported.
    Findings,
}

impl Outcome {
    pub fn from_count(typos: usize) -> Self {
        if typos == 0 {
            Outcome::Clean
        } else {
            Outcome::Findings
        }
    }

    /// Returns the process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Clean => exit_codes::SUCCESS,
            Outcome::Findings => exit_codes::FINDINGS,
        }
    }
}

/// Dispatch a command to its implementation.
///
/// All command output goes to `out`; diagnostics go through `tracing`.
pub fn dispatch<W: Write>(cli: Cli, out: &mut W) -> Result<Outcome> {
    let Cli { global, command } = cli;

    match command {
        Command::Diff(args) => diff::cmd_diff(&global, args, out),
        Command::Check(args) => check::cmd_check(&global, args, out),
        Command::Word(args) => word::cmd_word(&global, args, out),
        Command::Config => show_config::cmd_config(&global, out),
    }
}

/// Pick the output format: the `--format` flag wins over the config.
fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        None => Ok(config.format),
        Some(name) => OutputFormat::from_str(name).ok_or_else(|| {
            SpellError::UserError(format!(
                "unknown output format '{}' (expected text, github, or json)",
                name
            ))
        }),
    }
}

/// Check `lines` and write the findings to `out`.
fn report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    lines: &[DiffLine],
    settings: &Settings,
) -> Result<Outcome> {
    let findings = collect_findings(lines, &settings.checker, &settings.options);
    debug!(format = format.as_str(), findings = findings.len(), "report: writing");
    write_findings(&mut *out, format, &findings)?;
    Ok(Outcome::from_count(findings.len()))
}
