//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::MessageRecord;
use crate::core::models::{ExportRow, OutputConfig};
use crate::error::{ChatstatError, Result};

/// Writes records to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date`, `Time`, `Author`, `Message`
///   - With counts: `Word_Count`, `Letter_Count` appended
/// - Unset fields are written as empty cells
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let path = output_path.as_ref();
    let file = File::create(path).map_err(|e| ChatstatError::create(path, e))?;
    write_csv_to(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes records as CSV to any writer.
pub fn write_csv_to<W: Write>(
    records: &[MessageRecord],
    out: W,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for record in records {
        writer.write_record(build_record(&ExportRow::from_record(record, config)))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Date", "Time", "Author", "Message"];
    if config.include_counts {
        header.push("Word_Count");
        header.push("Letter_Count");
    }
    header
}

fn build_record(row: &ExportRow<'_>) -> Vec<String> {
    let mut fields = vec![
        row.date.unwrap_or_default().to_string(),
        row.time.unwrap_or_default().to_string(),
        row.author.unwrap_or_default().to_string(),
        row.message.to_string(),
    ];
    if let (Some(words), Some(letters)) = (row.word_count, row.letter_count) {
        fields.push(words.to_string());
        fields.push(letters.to_string());
    }
    fields
}
