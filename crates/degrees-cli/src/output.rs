//! Output formatting for connection summaries.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use degrees_lib::ConnectionSummary;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console protocol: degree count and one line per hop.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

impl OutputFormat {
    /// Whether interactive prompts and status lines belong on stdout.
    pub fn is_interactive(self) -> bool {
        matches!(self, OutputFormat::Text)
    }

    /// Write `summary` to `out` in this format.
    pub fn render_connection<W: Write>(self, summary: &ConnectionSummary, out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Text => write!(out, "{}", summary.render_text())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, summary)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
