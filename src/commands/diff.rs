//! Implementation of the `diffspell diff` command.
//!
//! Checks the lines added between two revisions of a git repository.

use super::{Outcome, Settings, report, resolve_format};
use crate::cli::{DiffArgs, GlobalArgs};
use crate::context::RunContext;
use crate::diff::git_added_lines;
use crate::error::Result;
use std::io::Write;
use tracing::info;

/// Execute the `diffspell diff` command.
///
/// Revision flags override the config's `base`/`head`. The format is
/// resolved before git runs so a bad `--format` fails fast.
pub fn cmd_diff<W: Write>(global: &GlobalArgs, args: DiffArgs, out: &mut W) -> Result<Outcome> {
    let ctx = match &args.repo {
        Some(dir) => RunContext::resolve_from(dir)?,
        None => RunContext::resolve()?,
    };

    let mut settings = Settings::load(&ctx, global)?;
    if let Some(base) = args.base {
        settings.config.base = base;
    }
    if let Some(head) = args.head {
        settings.config.head = head;
    }

    let format = resolve_format(args.format.as_deref(), &settings.config)?;
    let range = settings.config.diff_range();

    let lines = git_added_lines(&ctx.root, &range)?;
    info!(added = lines.len(), repo = %ctx.root.display(), "diff: added lines collected");

    report(out, format, &lines, &settings)
}
