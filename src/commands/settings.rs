//! Effective settings for one run: config file, command-line overrides,
//! and the word tables built from them.

use crate::check::CheckOptions;
use crate::cli::GlobalArgs;
use crate::config::Config;
use crate::context::RunContext;
use crate::dictionary::{AllowList, Checker, TypoDictionary};
use crate::error::Result;
use tracing::{debug, info};

/// Everything a checking command needs, loaded once up front.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: Config,
    pub checker: Checker,
    pub options: CheckOptions,
}

impl Settings {
    /// Load config, apply overrides, and build the checker.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Ready to check
    /// * `Err(SpellError::ConfigLoad)` - Config, allow-list, or a dictionary failed to load
    /// * `Err(SpellError::UserError)` - An exclude glob does not compile
    pub fn load(ctx: &RunContext, global: &GlobalArgs) -> Result<Self> {
        let config = effective_config(ctx, global)?;
        let checker = build_checker(ctx, &config)?;
        let options = CheckOptions::from_config(&config)?;

        Ok(Self {
            config,
            checker,
            options,
        })
    }
}

/// Read the config file and apply command-line overrides.
///
/// The default config path may be missing; an explicit `--config` may not.
pub(super) fn effective_config(ctx: &RunContext, global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(ctx.path(path))?,
        None => Config::load_or_default(ctx.default_config_path())?,
    };

    apply_overrides(&mut config, global);
    debug!(?config, "settings: effective config");
    Ok(config)
}

fn apply_overrides(config: &mut Config, global: &GlobalArgs) {
    if let Some(path) = &global.allowlist {
        config.allowlist = path.display().to_string();
    }

    config
        .dictionaries
        .extend(global.dictionaries.iter().map(|p| p.display().to_string()));
    config.exclude.extend(global.exclude.iter().cloned());

    if global.no_ignore_urls {
        config.ignore_urls = false;
    }
    if global.no_ignore_all_caps {
        config.ignore_all_caps = false;
    }
    if global.no_code_fences {
        config.skip_code_fences = false;
    }
}

/// Builtin dictionary, then extra dictionaries in order, then the allow-list.
fn build_checker(ctx: &RunContext, config: &Config) -> Result<Checker> {
    let mut typos = TypoDictionary::builtin();
    debug!(entries = typos.len(), "dictionary: builtin");

    for name in &config.dictionaries {
        let path = ctx.path(name);
        let merged = typos.merge_file(&path)?;
        info!(path = %path.display(), entries = merged, "dictionary: merged");
    }

    let allowlist_path = ctx.path(&config.allowlist);
    let mut allowed = AllowList::load(&allowlist_path)?;
    allowed.extend(&config.allow);

    info!(
        typos = typos.len(),
        allowed = allowed.len(),
        allowlist = %allowlist_path.display(),
        "settings: word tables ready"
    );

    Ok(Checker::new(typos, allowed))
}
