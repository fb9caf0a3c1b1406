//! CLI argument parsing for idea-spark.
//!
//! Uses clap derive macros; the binary in `tools/idea_spark.rs` drives the
//! generator with the parsed values.

use clap::Parser;
use std::path::PathBuf;

use crate::schema::tone::Tone;

/// Generate creative angles and next steps for any topic.
///
/// Output is seeded from the topic and audience, so the same inputs always
/// produce the same report.
#[derive(Parser, Debug)]
#[command(name = "idea-spark")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:
  idea-spark \"remote work\"
  idea-spark \"AI ethics\" --tone professional
  idea-spark \"cooking\" --tone playful --audience \"busy parents\"")]
pub struct Cli {
    /// The topic to generate ideas for.
    pub topic: String,

    /// Tone of the suggestions.
    #[arg(long, value_enum, default_value_t = Tone::Punchy)]
    pub tone: Tone,

    /// Target audience to tailor suggestions (free text).
    #[arg(long)]
    pub audience: Option<String>,

    /// Copy the report to the system clipboard after printing it.
    #[arg(long)]
    pub copy: bool,

    /// RON file with custom template pools, overlaid on the built-ins.
    #[arg(long, value_name = "PATH")]
    pub templates: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
