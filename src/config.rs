//! Configuration types for parsing and analysis.
//!
//! Plain builder-style structs, usable from library code without any CLI
//! framework. The `chatstat` binary maps its arguments onto them.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_buffer_size(128 * 1024);
//! let analysis = AnalysisConfig::new()
//!     .with_top_times(10)
//!     .with_media_marker("<Medien ausgeschlossen>");
//!
//! assert_eq!(parser.buffer_size, 128 * 1024);
//! assert_eq!(analysis.top_times, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Body text WhatsApp writes in place of an attachment.
pub const DEFAULT_MEDIA_MARKER: &str = "<Media omitted>";

/// Configuration for reading chat exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Read buffer size for file input (default: 64KB, minimum 1 byte)
    pub buffer_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Compound-score cut-offs for sentiment labels.
///
/// A score `>= positive` is Positive, a score `<= negative` is Negative,
/// anything strictly between is Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

/// Configuration for statistics and sentiment analysis.
///
/// # Example
///
/// ```rust
/// use chatstat::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_sentiment(false);
/// assert!(!config.include_sentiment);
/// assert_eq!(config.media_marker, "<Media omitted>");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Body text that marks a media message (default: `<Media omitted>`)
    pub media_marker: String,

    /// How many time slots to keep in the busiest-times ranking (default: 5)
    pub top_times: usize,

    /// Score messages for sentiment (default: true)
    pub include_sentiment: bool,

    /// Label cut-offs (default: ±0.05)
    pub thresholds: SentimentThresholds,

    /// Decimal places kept on compound scores (default: 5)
    pub score_precision: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_marker: DEFAULT_MEDIA_MARKER.to_string(),
            top_times: 5,
            include_sentiment: true,
            thresholds: SentimentThresholds::default(),
            score_precision: 5,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media marker text.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Sets how many busiest time slots are reported.
    #[must_use]
    pub fn with_top_times(mut self, n: usize) -> Self {
        self.top_times = n;
        self
    }

    /// Enables or disables sentiment scoring.
    #[must_use]
    pub fn with_sentiment(mut self, enabled: bool) -> Self {
        self.include_sentiment = enabled;
        self
    }

    /// Sets the sentiment label cut-offs.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: SentimentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Sets the number of decimal places kept on compound scores.
    #[must_use]
    pub fn with_score_precision(mut self, digits: u32) -> Self {
        self.score_precision = digits;
        self
    }
}
