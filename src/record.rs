//! Parsed chat-log entries.
//!
//! [`MessageRecord`] is the single output type of the log parser. One record
//! corresponds to one header line of the export (plus any continuation lines
//! that follow it), or to the text collected before the first header.
//!
//! # Examples
//!
//! ```
//! use chatstat::MessageRecord;
//!
//! let record = MessageRecord::new("01/02/2021", "10:30 am", Some("Alice"), "Hi");
//! assert_eq!(record.author(), Some("Alice"));
//! assert!(!record.is_system());
//! ```
//!
//! Records serialize with the export's column names:
//!
//! ```
//! use chatstat::MessageRecord;
//!
//! let record = MessageRecord::new("01/02/2021", "10:30 am", None::<String>, "Bob left");
//! let json = serde_json::to_string(&record)?;
//! assert_eq!(
//!     json,
//!     r#"{"Date":"01/02/2021","Time":"10:30 am","Author":null,"Message":"Bob left"}"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// One parsed unit of conversation.
///
/// | Field | Column | Description |
/// |-------|--------|-------------|
/// | `date` | `Date` | Date string exactly as it appeared in the header |
/// | `time` | `Time` | Time-of-day string exactly as it appeared |
/// | `author` | `Author` | Sender, `None` for system notices |
/// | `body` | `Message` | Text, continuation lines joined with single spaces |
///
/// `date` and `time` are only `None` for a record flushed before any header
/// line was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "Date")]
    pub date: Option<String>,

    #[serde(rename = "Time")]
    pub time: Option<String>,

    #[serde(rename = "Author")]
    pub author: Option<String>,

    #[serde(rename = "Message")]
    pub body: String,
}

impl MessageRecord {
    /// Creates a record with date, time and an optional author.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        author: Option<impl Into<String>>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            date: Some(date.into()),
            time: Some(time.into()),
            author: author.map(Into::into),
            body: body.into(),
        }
    }

    /// Returns the date string, if a header has been seen.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Returns the time string, if a header has been seen.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Returns the author, if the entry was author-prefixed.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Returns the message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for entries without an attributable sender
    /// (group notices, encryption banners, text before the first header).
    pub fn is_system(&self) -> bool {
        self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = MessageRecord::new("01/02/2021", "9:05 pm", Some("Bob"), "hey");
        assert_eq!(record.date(), Some("01/02/2021"));
        assert_eq!(record.time(), Some("9:05 pm"));
        assert_eq!(record.author(), Some("Bob"));
        assert_eq!(record.body(), "hey");
    }

    #[test]
    fn test_record_system() {
        let record = MessageRecord::new("01/02/2021", "9:05 pm", None::<&str>, "Bob joined");
        assert!(record.is_system());
        assert!(MessageRecord::default().is_system());
    }

    #[test]
    fn test_default_record_is_unset() {
        let record = MessageRecord::default();
        assert!(record.date().is_none());
        assert!(record.time().is_none());
        assert_eq!(record.body(), "");
    }

    #[test]
    fn test_record_serialization_columns() {
        let record = MessageRecord::new("01/02/2021", "10:30 am", Some("Alice"), "Hi");
        let json = serde_json::to_string(&record).unwrap();
        let date = json.find("\"Date\"").unwrap();
        let time = json.find("\"Time\"").unwrap();
        let author = json.find("\"Author\"").unwrap();
        let message = json.find("\"Message\"").unwrap();
        assert!(date < time && time < author && author < message);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{"Date":null,"Time":null,"Author":null,"Message":""}"#;
        let record: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, MessageRecord::default());
    }
}
