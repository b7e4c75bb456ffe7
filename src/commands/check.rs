//! Implementation of the `diffspell check` command.
//!
//! Checks a unified diff read from a file or stdin.

use super::{Outcome, Settings, report, resolve_format};
use crate::cli::{CheckArgs, GlobalArgs};
use crate::context::RunContext;
use crate::diff::parse_added_lines;
use crate::error::{Result, SpellError};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use tracing::info;

/// Execute the `diffspell check` command.
pub fn cmd_check<W: Write>(global: &GlobalArgs, args: CheckArgs, out: &mut W) -> Result<Outcome> {
    let ctx = RunContext::resolve()?;
    let settings = Settings::load(&ctx, global)?;
    let format = resolve_format(args.format.as_deref(), &settings.config)?;

    let lines = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            let path = ctx.path(path);
            let file = File::open(&path).map_err(|e| {
                SpellError::MalformedInput(format!("cannot open '{}': {}", path.display(), e))
            })?;
            info!(path = %path.display(), "check: reading diff file");
            parse_added_lines(BufReader::new(file))?
        }
        _ => {
            info!("check: reading diff from stdin");
            parse_added_lines(io::stdin().lock())?
        }
    };

    report(out, format, &lines, &settings)
}
