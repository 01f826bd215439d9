//! Counting and ranking statistics over parsed records.
//!
//! Rankings are sorted by value, largest first. Entries with equal values
//! keep the order in which their key first appeared in the chat.

use std::collections::HashMap;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::MessageRecord;

/// One bar of a ranked aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub key: String,
    pub value: T,
}

impl<T> Ranked<T> {
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Text statistics for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageStats {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Unicode scalar values
    pub letter_count: usize,
}

impl MessageStats {
    /// Computes statistics for a message body.
    pub fn of(body: &str) -> Self {
        Self {
            word_count: word_count(body),
            letter_count: letter_count(body),
        }
    }
}

/// Number of whitespace-delimited tokens in `body`.
///
/// ```
/// use chatstat::core::stats::word_count;
///
/// assert_eq!(word_count("see you  at 5"), 4);
/// assert_eq!(word_count(""), 0);
/// ```
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Number of characters in `body`.
pub fn letter_count(body: &str) -> usize {
    body.chars().count()
}

/// Sums `(key, amount)` pairs into a ranking.
fn tally<'a>(items: impl IntoIterator<Item = (&'a str, usize)>) -> Vec<Ranked<usize>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<Ranked<usize>> = Vec::new();

    for (key, amount) in items {
        match index.get(key) {
            Some(&i) => totals[i].value += amount,
            None => {
                index.insert(key, totals.len());
                totals.push(Ranked::new(key, amount));
            }
        }
    }

    // Stable sort keeps first-appearance order among ties
    totals.sort_by(|a, b| b.value.cmp(&a.value));
    totals
}

/// Messages per author. Records without an author are skipped.
pub fn count_by_author<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
) -> Vec<Ranked<usize>> {
    tally(records.into_iter().filter_map(|r| r.author().map(|a| (a, 1))))
}

/// Total words per author.
pub fn words_by_author<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
) -> Vec<Ranked<usize>> {
    tally(
        records
            .into_iter()
            .filter_map(|r| r.author().map(|a| (a, word_count(&r.body)))),
    )
}

/// Total characters per author.
pub fn letters_by_author<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
) -> Vec<Ranked<usize>> {
    tally(
        records
            .into_iter()
            .filter_map(|r| r.author().map(|a| (a, letter_count(&r.body)))),
    )
}

/// The `top_n` most frequent time stamps.
///
/// ```
/// use chatstat::MessageRecord;
/// use chatstat::core::stats::busiest_times;
///
/// let records = vec![
///     MessageRecord::new("01/02/2021", "9:00 pm", Some("A"), "x"),
///     MessageRecord::new("01/02/2021", "9:05 pm", Some("B"), "y"),
///     MessageRecord::new("02/02/2021", "9:05 pm", Some("A"), "z"),
/// ];
///
/// let top = busiest_times(&records, 1);
/// assert_eq!(top[0].key, "9:05 pm");
/// assert_eq!(top[0].value, 2);
/// ```
pub fn busiest_times<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    top_n: usize,
) -> Vec<Ranked<usize>> {
    let mut ranking = tally(records.into_iter().filter_map(|r| r.time().map(|t| (t, 1))));
    ranking.truncate(top_n);
    ranking
}

/// Parses the hour (0-23) out of a `H:MM am` / `HH:MM pm` time string.
///
/// ```
/// use chatstat::core::stats::hour_of_day;
///
/// assert_eq!(hour_of_day("12:15 am"), Some(0));
/// assert_eq!(hour_of_day("9:05 pm"), Some(21));
/// assert_eq!(hour_of_day("noon"), None);
/// ```
pub fn hour_of_day(time: &str) -> Option<u32> {
    NaiveTime::parse_from_str(&time.trim().to_uppercase(), "%I:%M %p")
        .ok()
        .map(|t| t.hour())
}

/// Message counts per hour of day. Unparseable times are skipped.
pub fn hourly_histogram<'a>(records: impl IntoIterator<Item = &'a MessageRecord>) -> [usize; 24] {
    let mut hours = [0usize; 24];
    for hour in records
        .into_iter()
        .filter_map(|r| r.time().and_then(hour_of_day))
    {
        hours[hour as usize] += 1;
    }
    hours
}
