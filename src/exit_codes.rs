//! Exit code constants for the diffspell CLI.
//!
//! - 0: No findings
//! - 1: Findings present
//! - 2: Operational error (bad arguments, diff source failure, output failure)

/// No typos were found.
pub const SUCCESS: i32 = 0;

/// At least one typo was reported.
pub const FINDINGS: i32 = 1;

/// Anything went wrong before a verdict could be reached.
pub const OPERATIONAL_ERROR: i32 = 2;
