//! CLI argument parsing for diffspell.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Diffspell: flag known typos in the lines a change adds.
///
/// Only added lines are checked. Words on the allow-list, URLs, all-caps
/// words, identifiers glued to digits, and fenced code blocks are skipped.
///
/// Exit status: 0 no typos, 1 typos found, 2 error.
#[derive(Parser, Debug)]
#[command(name = "diffspell")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments, exiting on `--help` or invalid input.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: .diffspell/config.yaml, optional).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Allow-list file (overrides the config's `allowlist`).
    #[arg(long, global = true, value_name = "PATH")]
    pub allowlist: Option<PathBuf>,

    /// Extra dictionary file, merged over the builtin one (repeatable).
    #[arg(long = "dictionary", global = true, value_name = "PATH")]
    pub dictionaries: Vec<PathBuf>,

    /// Glob for files to skip (repeatable, adds to the config's `exclude`).
    #[arg(long, global = true, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Check words inside URLs too.
    #[arg(long, global = true)]
    pub no_ignore_urls: bool,

    /// Check words written entirely in capitals too.
    #[arg(long, global = true)]
    pub no_ignore_all_caps: bool,

    /// Check lines inside Markdown code fences too.
    #[arg(long, global = true)]
    pub no_code_fences: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands for diffspell.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the lines added between two git revisions.
    ///
    /// Runs `git diff --no-color -U0 BASE...HEAD` and checks its added lines.
    Diff(DiffArgs),

    /// Check the lines added by a unified diff read from a file or stdin.
    Check(CheckArgs),

    /// Look up individual words.
    ///
    /// Prints `typo`, `allowed`, or `ok` for each word.
    Word(WordArgs),

    /// Print the effective configuration as YAML.
    Config,
}

/// Arguments for the `diff` command.
#[derive(Parser, Debug, Default)]
pub struct DiffArgs {
    /// Base revision (default from config: origin/main).
    #[arg(long)]
    pub base: Option<String>,

    /// Head revision (default from config: HEAD). Pass "" to compare the
    /// base against the working tree.
    #[arg(long)]
    pub head: Option<String>,

    /// Output format: text, github, or json.
    #[arg(long)]
    pub format: Option<String>,

    /// Repository directory to run git in (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Diff file to read; stdin when omitted or "-".
    pub file: Option<PathBuf>,

    /// Output format: text, github, or json.
    #[arg(long)]
    pub format: Option<String>,
}

/// Arguments for the `word` command.
#[derive(Parser, Debug, Default)]
pub struct WordArgs {
    /// Words to look up.
    #[arg(required = true)]
    pub words: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_diff_with_overrides() {
        let cli = Cli::try_parse_from([
            "diffspell",
            "diff",
            "--base",
            "main",
            "--head",
            "feature",
            "--format",
            "github",
            "--exclude",
            "vendor/**",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.exclude, vec!["vendor/**"]);
        match cli.command {
            Command::Diff(args) => {
                assert_eq!(args.base.as_deref(), Some("main"));
                assert_eq!(args.head.as_deref(), Some("feature"));
                assert_eq!(args.format.as_deref(), Some("github"));
                assert!(args.repo.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_from_stdin() {
        let cli = Cli::try_parse_from(["diffspell", "--no-code-fences", "check"]).unwrap();
        assert!(cli.global.no_code_fences);
        assert!(matches!(cli.command, Command::Check(CheckArgs { file: None, .. })));
    }

    #[test]
    fn test_word_requires_arguments() {
        assert!(Cli::try_parse_from(["diffspell", "word"]).is_err());
    }

    #[test]
    fn test_repeatable_dictionary_flag() {
        let cli = Cli::try_parse_from([
            "diffspell",
            "word",
            "teh",
            "--dictionary",
            "a.txt",
            "--dictionary",
            "b.txt",
        ])
        .unwrap();
        assert_eq!(
            cli.global.dictionaries,
            vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
        );
    }
}
