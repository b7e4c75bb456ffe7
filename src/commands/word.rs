//! Implementation of the `diffspell word` command.
//!
//! Looks words up directly, one verdict line per word:
//! ```text
//! recieve: typo -> receive
//! tokio: allowed
//! hello: ok
//! ```

use super::{Outcome, Settings};
use crate::cli::{GlobalArgs, WordArgs};
use crate::context::RunContext;
use crate::dictionary::Verdict;
use crate::error::{Result, SpellError};
use std::io::Write;

/// Execute the `diffspell word` command.
pub fn cmd_word<W: Write>(global: &GlobalArgs, args: WordArgs, out: &mut W) -> Result<Outcome> {
    let ctx = RunContext::resolve()?;
    let settings = Settings::load(&ctx, global)?;

    let mut typos = 0;
    for word in &args.words {
        let verdict = match settings.checker.check(word) {
            Verdict::Typo(corrections) => {
                typos += 1;
                format!("typo -> {}", corrections.join(", "))
            }
            Verdict::Allowed => "allowed".to_string(),
            Verdict::Clean => "ok".to_string(),
        };
        writeln!(out, "{}: {}", word, verdict).map_err(|e| SpellError::Output(e.to_string()))?;
    }
    out.flush().map_err(|e| SpellError::Output(e.to_string()))?;

    Ok(Outcome::from_count(typos))
}
