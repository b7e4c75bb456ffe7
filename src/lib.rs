//! Diffspell: a typo checker for the lines a change adds.
//!
//! A unified diff (from `git diff`, a file, or stdin) is reduced to its added
//! lines, each line is split into candidate words, and words found in the
//! typo dictionary but not on the allow-list are reported with their
//! position and suggested corrections.

pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod dictionary;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod extract;
pub mod git;
pub mod logging;
pub mod report;

#[cfg(test)]
mod test_support;
