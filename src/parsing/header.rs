//! Header recognition for chat exports.
//!
//! Exports in this dialect start every message with a stamp such as
//! `01/02/2021, 10:30 am - `, optionally followed by `Sender: `:
//!
//! ```text
//! 01/02/2021, 10:30 am - Alice: Hi
//! 01/02/2021, 10:31 am - Bob added Carol
//! 01/02/2021, 10:32 am - +91 98765 43210: Who is this?
//! ```
//!
//! Recognition is purely syntactic. Day `31` in a 30-day month or month `00`
//! are accepted; nothing here validates calendar dates.

use std::sync::LazyLock;

use regex::Regex;

/// Separator between the date-time stamp and the message text.
pub const HEADER_SEPARATOR: &str = " - ";

/// Separator between the date and the time inside the stamp.
pub const DATE_TIME_SEPARATOR: &str = ", ";

/// Separator between an author and the message body.
pub const AUTHOR_SEPARATOR: &str = ": ";

// DD/MM/YY(YY), H:MM or HH:MM, am|pm, then " -"
const HEADER_PATTERN: &str = r"^([0-2][0-9]|3[0-1])/(0[0-9]|1[0-2])/(\d\d|\d\d\d\d), ([0-9][0-9]:[0-9][0-9]|[0-9]:[0-9][0-9]) (am|pm) -";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is valid"));

static AUTHOR_REGEXES: LazyLock<Vec<(AuthorPattern, Regex)>> = LazyLock::new(|| {
    AuthorPattern::all()
        .iter()
        .map(|&p| (p, Regex::new(p.pattern()).expect("author pattern is valid")))
        .collect()
});

/// Shapes an author identity can take, in the order they are tried.
///
/// The order is significant: the first alternative that matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorPattern {
    /// `Alice: ...`
    SingleWord,
    /// `John Smith: ...`
    TwoWords,
    /// `Mary Jane Watson: ...`
    ThreeWords,
    /// `+91 98765 43210: ...`
    PhoneNumber,
}

impl AuthorPattern {
    /// Returns the anchored regex pattern for this alternative.
    ///
    /// Group 1 captures the identity token.
    pub fn pattern(self) -> &'static str {
        match self {
            AuthorPattern::SingleWord => r"^(\w+): ",
            AuthorPattern::TwoWords => r"^(\w+\s+\w+): ",
            AuthorPattern::ThreeWords => r"^(\w+\s+\w+\s+\w+): ",
            AuthorPattern::PhoneNumber => r"^(\+\d{2} \d{5} \d{5}): ",
        }
    }

    /// Returns all alternatives in try-order.
    pub fn all() -> &'static [AuthorPattern] {
        &[
            AuthorPattern::SingleWord,
            AuthorPattern::TwoWords,
            AuthorPattern::ThreeWords,
            AuthorPattern::PhoneNumber,
        ]
    }
}

/// The four fields extracted from a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub author: Option<&'a str>,
    pub message: &'a str,
}

/// Returns `true` if `line` starts with a date-time stamp.
///
/// ```
/// use chatstat::parsing::is_header_line;
///
/// assert!(is_header_line("01/02/2021, 10:30 am - Alice: Hi"));
/// assert!(!is_header_line("Hi there"));
/// ```
pub fn is_header_line(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}

/// Returns `true` if `message` begins with an identity followed by `": "`.
pub fn is_author_prefixed_line(message: &str) -> bool {
    match_author(message).is_some()
}

/// Finds the first author alternative matching the start of `message`.
///
/// Returns the winning alternative and the identity token.
///
/// ```
/// use chatstat::parsing::{AuthorPattern, match_author};
///
/// let (pattern, author) = match_author("John Smith: hello there").unwrap();
/// assert_eq!(pattern, AuthorPattern::TwoWords);
/// assert_eq!(author, "John Smith");
/// ```
pub fn match_author(message: &str) -> Option<(AuthorPattern, &str)> {
    AUTHOR_REGEXES.iter().find_map(|(pattern, regex)| {
        regex
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| (*pattern, m.as_str()))
    })
}

/// Splits a header line into date, time, optional author and message text.
///
/// Only the first `" - "` separates the stamp from the message, so the
/// message text may itself contain `" - "`. Likewise only the first `": "`
/// separates the author from the body.
///
/// ```
/// use chatstat::parsing::split_header_line;
///
/// let header = split_header_line("01/02/2021, 10:30 am - Alice: 5 - 3 = 2");
/// assert_eq!(header.date, "01/02/2021");
/// assert_eq!(header.time, "10:30 am");
/// assert_eq!(header.author, Some("Alice"));
/// assert_eq!(header.message, "5 - 3 = 2");
/// ```
pub fn split_header_line(line: &str) -> HeaderLine<'_> {
    // A trimmed header with nothing after the stamp ends in " -".
    let (date_time, message) = line.split_once(HEADER_SEPARATOR).unwrap_or_else(|| {
        (
            line.strip_suffix(HEADER_SEPARATOR.trim_end()).unwrap_or(line),
            "",
        )
    });

    let (date, time) = date_time
        .split_once(DATE_TIME_SEPARATOR)
        .unwrap_or((date_time, ""));

    let (author, message) = if is_author_prefixed_line(message) {
        match message.split_once(AUTHOR_SEPARATOR) {
            Some((author, body)) => (Some(author), body),
            None => (None, message),
        }
    } else {
        (None, message)
    };

    HeaderLine {
        date,
        time,
        author,
        message,
    }
}
