//! Chat log segmentation.
//!
//! [`LogParser`] turns the lines of an export into an ordered list of
//! [`MessageRecord`]s in a single top-to-bottom pass:
//!
//! - The first line (the export's metadata / encryption notice) is dropped.
//! - Every other line is trimmed.
//! - A header line closes the message being built (if any) and opens a new
//!   one with the header's date, time, author and text.
//! - Any other line is continuation text for the open message.
//! - At the end of input the open message is always closed, even when it is
//!   empty or no header was ever seen.
//!
//! Nothing in the content can make parsing fail. Lines that do not look like
//! headers are kept as message text.
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::LogParser;
//!
//! let export = "\
//! Messages and calls are end-to-end encrypted.
//! 01/02/2021, 09:00 am - Bob: first line
//! second line no header
//! 01/02/2021, 09:05 am - Alice: next msg";
//!
//! let records = LogParser::new().parse_str(export);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].body, "first line second line no header");
//! assert_eq!(records[1].author.as_deref(), Some("Alice"));
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::MessageRecord;
use crate::config::ParserConfig;
use crate::error::{ChatstatError, Result};
use crate::parsing::{is_header_line, split_header_line};

/// Parser for chat exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstat::parser::LogParser;
///
/// let parser = LogParser::new();
/// let records = parser.parse("chat.txt".as_ref())?;
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and segments an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Open`] if the file cannot be opened and
    /// [`ChatstatError::Io`] if reading fails or the text is not valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        let file = File::open(path).map_err(|e| ChatstatError::open(path, e))?;
        // A zero-capacity BufReader reports EOF on the first read
        let reader = BufReader::with_capacity(self.config.buffer_size.max(1), file);
        debug!(path = %path.display(), "reading chat export");
        self.parse_reader(reader)
    }

    /// Reads and segments an export file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<Vec<MessageRecord>> {
        self.parse(Path::new(path))
    }

    /// Segments an export read from any buffered source.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<MessageRecord>> {
        let mut lines = reader.lines();
        let mut segmenter = Segmenter::default();

        // Metadata line, discarded but still checked for read errors
        if let Some(first) = lines.next() {
            first?;
        }
        for line in lines {
            segmenter.push_line(&line?);
        }

        Ok(segmenter.finish())
    }

    /// Segments an export already held in memory.
    pub fn parse_str(&self, content: &str) -> Vec<MessageRecord> {
        parse_lines(content.lines())
    }
}

/// Segments a sequence of raw lines, the first of which is discarded.
///
/// ```rust
/// use chatstat::parser::parse_lines;
///
/// let records = parse_lines(["metadata", "01/02/2021, 10:30 am - Alice: Hi"]);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].body, "Hi");
/// ```
pub fn parse_lines<I, S>(lines: I) -> Vec<MessageRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut segmenter = Segmenter::default();
    for line in lines.into_iter().skip(1) {
        segmenter.push_line(line.as_ref());
    }
    segmenter.finish()
}

/// Accumulator for one parsing pass.
#[derive(Debug, Default)]
struct Segmenter {
    output: Vec<MessageRecord>,
    buffer: Vec<String>,
    date: Option<String>,
    time: Option<String>,
    author: Option<String>,
    headers: usize,
}

impl Segmenter {
    fn push_line(&mut self, raw: &str) {
        let line = raw.trim();

        if is_header_line(line) {
            if !self.buffer.is_empty() {
                self.flush();
            }

            let header = split_header_line(line);
            trace!(
                date = header.date,
                time = header.time,
                author = header.author,
                "header line"
            );

            self.headers += 1;
            self.date = Some(header.date.to_string());
            self.time = Some(header.time.to_string());
            self.author = header.author.map(str::to_string);
            self.buffer.push(header.message.to_string());
        } else {
            self.buffer.push(line.to_string());
        }
    }

    fn flush(&mut self) {
        let body = self.buffer.join(" ");
        self.buffer.clear();
        self.output.push(MessageRecord {
            date: self.date.clone(),
            time: self.time.clone(),
            author: self.author.clone(),
            body,
        });
    }

    fn finish(mut self) -> Vec<MessageRecord> {
        self.flush();
        debug!(
            headers = self.headers,
            records = self.output.len(),
            "segmented chat log"
        );
        self.output
    }
}
