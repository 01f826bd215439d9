//! JSON Lines (JSONL) output writer.
//!
//! One JSON object per line, so large exports can be consumed record by
//! record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::MessageRecord;
use crate::core::models::{ExportRow, OutputConfig};
use crate::error::{ChatstatError, Result};

/// Writes records to a JSONL file.
///
/// ```jsonl
/// {"Date":"01/02/2021","Time":"9:00 am","Author":"Alice","Message":"Hello"}
/// {"Date":"01/02/2021","Time":"9:01 am","Author":null,"Message":"Bob joined"}
/// ```
pub fn write_jsonl(
    records: &[MessageRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let path = output_path.as_ref();
    let file = File::create(path).map_err(|e| ChatstatError::create(path, e))?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string, each line newline-terminated.
pub fn to_jsonl(records: &[MessageRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_jsonl_to(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_jsonl_to<W: Write>(records: &[MessageRecord], out: &mut W, config: &OutputConfig) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, &ExportRow::from_record(record, config))?;
        writeln!(out)?;
    }
    Ok(())
}
