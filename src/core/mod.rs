//! Analysis and export of parsed records.
//!
//! This module contains:
//! - [`filter`] - Split records into text, media and system entries
//! - [`stats`] - Per-author counts, word/letter totals, activity by time
//! - [`sentiment`] - Lexicon-based compound scores and labels
//! - [`chart`] - Plain-text horizontal bar charts
//! - [`report`] - [`analyze`] and the [`ChatReport`] it produces
//! - [`models`] - [`OutputConfig`] and the exported row shape
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstat::core::{AnalysisConfig, LexiconScorer, analyze};
//! use chatstat::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("01/02/2021", "9:00 pm", Some("Alice"), "great news"),
//!     MessageRecord::new("01/02/2021", "9:01 pm", Some("Bob"), "<Media omitted>"),
//! ];
//! let report = analyze(&records, &AnalysisConfig::default(), &LexiconScorer::new());
//! assert_eq!(report.author_count(), 2);
//! ```

pub mod chart;
pub mod filter;
pub mod models;
pub mod output;
pub mod report;
pub mod sentiment;
pub mod stats;

// Re-export main types for convenience
pub use crate::config::AnalysisConfig;
pub use chart::BarChart;
pub use filter::{media_messages, system_messages, text_messages};
pub use models::OutputConfig;
pub use report::{ChatReport, SentimentReport, analyze};
pub use sentiment::{LexiconScorer, Sentiment, SentimentScorer};
#[cfg(feature = "vader")]
pub use sentiment::VaderScorer;
pub use stats::{MessageStats, Ranked};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
