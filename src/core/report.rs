//! Whole-chat analysis.
//!
//! [`analyze`] runs filtering, counting and sentiment scoring over parsed
//! records and collects the results into a [`ChatReport`], which can be
//! rendered as text charts or serialized as JSON.
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::AnalysisConfig;
//! use chatstat::core::report::analyze;
//! use chatstat::core::sentiment::LexiconScorer;
//! use chatstat::parser::LogParser;
//!
//! let export = "\
//! Messages and calls are end-to-end encrypted.
//! 01/02/2021, 9:00 pm - Alice: what a great evening
//! 01/02/2021, 9:01 pm - Bob: <Media omitted>
//! 01/02/2021, 9:02 pm - Bob left";
//!
//! let records = LogParser::new().parse_str(export);
//! let report = analyze(&records, &AnalysisConfig::default(), &LexiconScorer::new());
//!
//! assert_eq!(report.total_records, 3);
//! assert_eq!(report.text_records, 1);
//! assert_eq!(report.media_records, 1);
//! assert_eq!(report.system_records, 1);
//! assert!(report.render_text().contains("Messages per author"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chart::BarChart;
use super::filter::{media_messages, system_messages, text_messages};
use super::sentiment::{
    SentimentCounts, SentimentScorer, average_sentiment_by_author, score_messages,
    sentiment_counts,
};
use super::stats::{
    Ranked, busiest_times, count_by_author, hourly_histogram, letters_by_author, words_by_author,
};
use crate::MessageRecord;
use crate::config::AnalysisConfig;

/// Sentiment section of a [`ChatReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub counts: SentimentCounts,
    pub average_by_author: Vec<Ranked<f64>>,
}

/// Aggregated statistics for one chat export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    pub total_records: usize,
    /// Records without an author
    pub system_records: usize,
    /// Records whose body is the media marker
    pub media_records: usize,
    /// Authored, non-media records
    pub text_records: usize,

    /// All authored records per author, media included
    pub messages_by_author: Vec<Ranked<usize>>,
    pub media_by_author: Vec<Ranked<usize>>,
    pub words_by_author: Vec<Ranked<usize>>,
    pub letters_by_author: Vec<Ranked<usize>>,
    pub busiest_times: Vec<Ranked<usize>>,
    /// Text messages per hour of day, index 0 is midnight
    pub hourly_activity: [usize; 24],

    pub sentiment: Option<SentimentReport>,
}

/// Runs the full analysis over `records`.
///
/// Word, letter, time and sentiment statistics only look at text messages.
/// Sentiment is skipped when `config.include_sentiment` is false.
pub fn analyze<S>(records: &[MessageRecord], config: &AnalysisConfig, scorer: &S) -> ChatReport
where
    S: SentimentScorer + ?Sized,
{
    let text = text_messages(records, &config.media_marker);
    let media = media_messages(records, &config.media_marker);
    let system = system_messages(records);

    let sentiment = config.include_sentiment.then(|| {
        let scored = score_messages(text.iter().copied(), scorer, config);
        SentimentReport {
            counts: sentiment_counts(&scored),
            average_by_author: average_sentiment_by_author(&scored),
        }
    });

    let report = ChatReport {
        total_records: records.len(),
        system_records: system.len(),
        media_records: media.len(),
        text_records: text.len(),
        messages_by_author: count_by_author(records),
        media_by_author: count_by_author(media.iter().copied()),
        words_by_author: words_by_author(text.iter().copied()),
        letters_by_author: letters_by_author(text.iter().copied()),
        busiest_times: busiest_times(text.iter().copied(), config.top_times),
        hourly_activity: hourly_histogram(text.iter().copied()),
        sentiment,
    };

    debug!(
        records = report.total_records,
        text = report.text_records,
        media = report.media_records,
        system = report.system_records,
        authors = report.messages_by_author.len(),
        "analyzed chat"
    );

    report
}

impl ChatReport {
    /// Number of distinct authors.
    pub fn author_count(&self) -> usize {
        self.messages_by_author.len()
    }

    /// Renders the summary followed by one bar chart per statistic.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str("Chat summary\n");
        out.push_str(&format!("  Records:         {}\n", self.total_records));
        out.push_str(&format!("  Authors:         {}\n", self.author_count()));
        out.push_str(&format!("  Text messages:   {}\n", self.text_records));
        out.push_str(&format!("  Media messages:  {}\n", self.media_records));
        out.push_str(&format!("  System notices:  {}\n", self.system_records));
        if let Some(sentiment) = &self.sentiment {
            out.push_str(&format!(
                "  Sentiment:       {} positive, {} neutral, {} negative\n",
                sentiment.counts.positive, sentiment.counts.neutral, sentiment.counts.negative
            ));
        }

        let mut charts = vec![
            BarChart::from_counts("Messages per author", &self.messages_by_author),
            BarChart::from_counts("Media per author", &self.media_by_author),
            BarChart::from_counts("Words per author", &self.words_by_author),
            BarChart::from_counts("Busiest times", &self.busiest_times),
            self.hourly_chart(),
        ];
        if let Some(sentiment) = &self.sentiment {
            charts.push(BarChart::from_scores(
                "Average sentiment per author",
                &sentiment.average_by_author,
                3,
            ));
        }

        for chart in charts {
            out.push('\n');
            out.push_str(&chart.render());
        }

        out
    }

    fn hourly_chart(&self) -> BarChart {
        let mut chart = BarChart::new("Hourly activity");
        for (hour, &count) in self.hourly_activity.iter().enumerate() {
            chart.push(format!("{hour:02}:00"), count as f64, count.to_string());
        }
        chart
    }

    /// Serializes the report as pretty-printed JSON.
    #[cfg(feature = "json-output")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
