//! Output format writers for parsed records.
//!
//! - [`write_csv`] / [`to_csv`] - semicolon-delimited table, requires `csv-output`
//! - [`write_json`] / [`to_json`] - pretty JSON array, requires `json-output`
//! - [`write_jsonl`] / [`to_jsonl`] - one JSON object per line, requires `json-output`
//!
//! All three share the `Date`, `Time`, `Author`, `Message` columns, plus
//! `Word_Count` and `Letter_Count` when [`OutputConfig::with_counts`] is set.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{to_csv, write_jsonl};
//! use chatstat::core::models::OutputConfig;
//! use chatstat::MessageRecord;
//!
//! let records = vec![MessageRecord::new("01/02/2021", "9:00 am", Some("Alice"), "Hello!")];
//! let config = OutputConfig::new().with_counts();
//!
//! write_jsonl(&records, "messages.jsonl", &config)?;
//! let csv_string = to_csv(&records, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```
//!
//! [`OutputConfig::with_counts`]: crate::core::models::OutputConfig::with_counts

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv, write_csv_to};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
