//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::MessageRecord;
use crate::core::models::{ExportRow, OutputConfig};
use crate::error::{ChatstatError, Result};

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"Date": "01/02/2021", "Time": "9:00 am", "Author": "Alice", "Message": "Hello"},
///   {"Date": "01/02/2021", "Time": "9:01 am", "Author": null, "Message": "Bob joined"}
/// ]
/// ```
pub fn write_json(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let path = output_path.as_ref();
    let json = to_json(records, config)?;
    let mut file = File::create(path).map_err(|e| ChatstatError::create(path, e))?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
pub fn to_json(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<ExportRow<'_>> = records
        .iter()
        .map(|r| ExportRow::from_record(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
