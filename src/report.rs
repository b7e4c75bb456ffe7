//! Rendering findings for humans and CI systems.
//!
//! Output format per finding:
//! ```text
//! docs/guide.md:12:7  "recieve" -> receive
//! ::error file=docs/guide.md,line=12,col=7::Spellcheck: "recieve" -> receive
//! ```

use crate::error::{Result, SpellError};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// One reported typo occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Repository-relative file path.
    pub file: String,
    /// Line number in the new file (1-based).
    pub line: usize,
    /// Byte column of the word within the line (1-based).
    pub column: usize,
    /// The lowercased typo.
    pub word: String,
    /// Suggested corrections, in dictionary order.
    pub corrections: Vec<String>,
}

/// How findings are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `file:line:col  "word" -> corrections`
    #[default]
    Text,
    /// GitHub Actions `::error` workflow commands.
    Github,
    /// A JSON array of findings.
    Json,
}

impl OutputFormat {
    /// Parse an output format name (case-insensitive, surrounding spaces ignored).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "github" => Some(Self::Github),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Github => "github",
            Self::Json => "json",
        }
    }
}

/// Write all findings in the requested format.
///
/// # Returns
///
/// * `Ok(())` - Everything was written and flushed
/// * `Err(SpellError::Output)` - The writer failed
pub fn write_findings<W: Write>(w: W, format: OutputFormat, findings: &[Finding]) -> Result<()> {
    let mut out = BufWriter::new(w);
    let written = match format {
        OutputFormat::Text => write_lines(&mut out, findings, render_text),
        OutputFormat::Github => write_lines(&mut out, findings, render_github),
        OutputFormat::Json => serde_json::to_writer_pretty(&mut out, findings)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(out)),
    };

    written
        .and_then(|()| out.flush())
        .map_err(|e| SpellError::Output(e.to_string()))
}

fn write_lines<W: Write>(
    out: &mut W,
    findings: &[Finding],
    render: fn(&Finding) -> String,
) -> std::io::Result<()> {
    for finding in findings {
        writeln!(out, "{}", render(finding))?;
    }
    Ok(())
}

/// Render one finding in the plain text format.
pub fn render_text(f: &Finding) -> String {
    format!(
        "{}:{}:{}  \"{}\" -> {}",
        f.file,
        f.line,
        f.column,
        f.word,
        f.corrections.join(", ")
    )
}

/// Render one finding as a GitHub Actions error annotation.
pub fn render_github(f: &Finding) -> String {
    format!(
        "::error file={},line={},col={}::Spellcheck: \"{}\" -> {}",
        f.file,
        f.line,
        f.column,
        f.word,
        f.corrections.join(", ")
    )
}
