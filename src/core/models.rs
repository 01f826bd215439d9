//! Output-side data models.

use serde::Serialize;

use super::stats::MessageStats;
use crate::MessageRecord;

/// Configuration for exported tables.
/// Controls which derived columns are written next to the four record columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Append `Word_Count` and `Letter_Count` columns
    pub include_counts: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_counts(mut self) -> Self {
        self.include_counts = true;
        self
    }
}

/// One exported row, borrowing from its record.
///
/// Field names match the CSV header so JSON and CSV outputs share columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    #[serde(rename = "Date")]
    pub date: Option<&'a str>,
    #[serde(rename = "Time")]
    pub time: Option<&'a str>,
    #[serde(rename = "Author")]
    pub author: Option<&'a str>,
    #[serde(rename = "Message")]
    pub message: &'a str,
    #[serde(rename = "Word_Count", skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(rename = "Letter_Count", skip_serializing_if = "Option::is_none")]
    pub letter_count: Option<usize>,
}

impl<'a> ExportRow<'a> {
    pub fn from_record(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        let stats = config.include_counts.then(|| MessageStats::of(&record.body));
        Self {
            date: record.date(),
            time: record.time(),
            author: record.author(),
            message: &record.body,
            word_count: stats.map(|s| s.word_count),
            letter_count: stats.map(|s| s.letter_count),
        }
    }
}
