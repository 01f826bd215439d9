//! Line-level parsing utilities.
//!
//! Pure predicates and extractors used by [`LogParser`](crate::parser::LogParser)
//! to tell header lines from continuation lines and to pull the stamp and
//! author out of a header.

pub mod header;

pub use header::{
    AUTHOR_SEPARATOR, AuthorPattern, DATE_TIME_SEPARATOR, HEADER_SEPARATOR, HeaderLine,
    is_author_prefixed_line, is_header_line, match_author, split_header_line,
};
