//! Partition records into text, media and system entries.
//!
//! Text statistics and sentiment only make sense for messages a person
//! actually typed, so system notices (no author) and media placeholders are
//! set aside first.
//!
//! ```
//! use chatstat::MessageRecord;
//! use chatstat::core::filter::text_messages;
//!
//! let records = vec![
//!     MessageRecord::new("01/02/2021", "10:30 am", Some("Alice"), "Hi"),
//!     MessageRecord::new("01/02/2021", "10:31 am", Some("Bob"), "<Media omitted>"),
//!     MessageRecord::new("01/02/2021", "10:32 am", None::<String>, "Carol left"),
//! ];
//!
//! let text = text_messages(&records, "<Media omitted>");
//! assert_eq!(text.len(), 1);
//! assert_eq!(text[0].body, "Hi");
//! ```

use crate::MessageRecord;

/// Returns `true` if the record's body is exactly the media marker.
pub fn is_media(record: &MessageRecord, marker: &str) -> bool {
    record.body == marker
}

/// Returns `true` if the record has no author.
pub fn is_system(record: &MessageRecord) -> bool {
    record.is_system()
}

/// Records with an author whose body is not a media placeholder.
pub fn text_messages<'a>(records: &'a [MessageRecord], marker: &str) -> Vec<&'a MessageRecord> {
    records
        .iter()
        .filter(|r| !is_system(r) && !is_media(r, marker))
        .collect()
}

/// Records whose body is a media placeholder.
pub fn media_messages<'a>(records: &'a [MessageRecord], marker: &str) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| is_media(r, marker)).collect()
}

/// Records without an author.
pub fn system_messages(records: &[MessageRecord]) -> Vec<&MessageRecord> {
    records.iter().filter(|r| is_system(r)).collect()
}
