//! Implementation of the `diffspell config` command.

use super::Outcome;
use super::settings::effective_config;
use crate::cli::GlobalArgs;
use crate::context::RunContext;
use crate::error::{Result, SpellError};
use std::io::Write;

/// Print the effective configuration (file plus overrides) as YAML.
pub fn cmd_config<W: Write>(global: &GlobalArgs, out: &mut W) -> Result<Outcome> {
    let ctx = RunContext::resolve()?;
    let config = effective_config(&ctx, global)?;
    let yaml = config.to_yaml()?;

    out.write_all(yaml.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| SpellError::Output(e.to_string()))?;

    Ok(Outcome::Clean)
}
