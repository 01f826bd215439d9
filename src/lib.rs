//! # Chatstat
//!
//! A Rust library for turning exported WhatsApp-style chat logs into
//! structured records and statistics.
//!
//! ## Overview
//!
//! An export is a text file whose first line is metadata, followed by entries
//! of the form:
//!
//! ```text
//! 01/02/2021, 10:30 am - Alice: Hello
//! and a continuation line
//! 01/02/2021, 10:31 am - Bob joined using this group's invite link
//! ```
//!
//! Chatstat splits such a file into [`MessageRecord`]s (date, time, optional
//! author, text) and derives per-author message, media, word and letter
//! counts, busiest times, hourly activity and lexicon-based sentiment.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = LogParser::new().parse("chat.txt".as_ref())?;
//!
//!     let report = analyze(&records, &AnalysisConfig::default(), &LexiconScorer::new());
//!     println!("{}", report.render_text());
//!
//!     write_csv(&records, "messages.csv", &OutputConfig::new().with_counts())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Header and author recognition for single lines
//! - [`parser`] - [`LogParser`](parser::LogParser), grouping lines into records
//! - [`record`] - [`MessageRecord`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - Filtering, statistics, sentiment, charts, reports and writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - `cli` / `logging` - Argument parsing and log setup for the binary (feature `cli`)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
///
/// let records = LogParser::new().parse_str("meta\n01/02/2021, 9:00 am - Bob: hi");
/// assert_eq!(records[0].author(), Some("Bob"));
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    pub use crate::error::{ChatstatError, Result};

    pub use crate::parser::LogParser;
    pub use crate::parsing::{is_author_prefixed_line, is_header_line, split_header_line};

    pub use crate::config::{AnalysisConfig, ParserConfig, SentimentThresholds};

    pub use crate::core::models::OutputConfig;
    pub use crate::core::report::{ChatReport, analyze};
    pub use crate::core::sentiment::{LexiconScorer, Sentiment, SentimentScorer};
    #[cfg(feature = "vader")]
    pub use crate::core::sentiment::VaderScorer;
    pub use crate::core::stats::Ranked;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
