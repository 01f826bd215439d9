//! Command-line interface definition using clap.
//!
//! [`Args`] maps the command line onto the library's configuration types:
//!
//! ```rust
//! use clap::Parser;
//! use chatstat::cli::Args;
//!
//! let args = Args::try_parse_from(["chatstat", "chat.txt", "--top-times", "3", "--counts"]).unwrap();
//! assert_eq!(args.analysis_config().top_times, 3);
//! assert!(args.output_config().include_counts);
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{AnalysisConfig, DEFAULT_MEDIA_MARKER};
use crate::core::models::OutputConfig;
use crate::format::OutputFormat;

/// Parse an exported chat log and print message, activity and sentiment
/// statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --json > report.json
    chatstat chat.txt -o messages.csv --counts
    chatstat chat.txt -o messages.out -f jsonl --no-sentiment
    RUST_LOG=chatstat=debug chatstat chat.txt")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Also write the parsed messages to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Table format for --output [default: from extension, else csv]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Number of busiest time slots to report
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_times: usize,

    /// Message text that marks an omitted attachment
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_MEDIA_MARKER)]
    pub media_marker: String,

    /// Skip sentiment scoring
    #[arg(long)]
    pub no_sentiment: bool,

    /// Score sentiment with the full VADER lexicon
    #[cfg(feature = "vader")]
    #[arg(long)]
    pub vader: bool,

    /// Add Word_Count and Letter_Count columns to --output
    #[arg(long)]
    pub counts: bool,

    /// Print the report as JSON instead of charts
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_top_times(self.top_times)
            .with_media_marker(self.media_marker.clone())
            .with_sentiment(!self.no_sentiment)
    }

    pub fn output_config(&self) -> OutputConfig {
        if self.counts {
            OutputConfig::new().with_counts()
        } else {
            OutputConfig::new()
        }
    }

    /// Where and how to write the parsed table, if `--output` was given.
    ///
    /// An explicit `--format` wins. Otherwise the format comes from the
    /// output extension, falling back to CSV for unknown extensions.
    pub fn output_target(&self) -> Option<(PathBuf, OutputFormat)> {
        let path = self.output.clone()?;
        let format = self
            .format
            .or_else(|| OutputFormat::from_path(&path).ok())
            .unwrap_or_default();
        Some((path, format))
    }
}
