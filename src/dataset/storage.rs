//! CSV persistence for tables.
//!
//! The header is always the record's fixed column list, written explicitly
//! so an empty table still produces a file with a header row.

use super::records::Record;
use super::table::Table;
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Location of a table file inside the output directory.
pub fn table_path(output_dir: impl AsRef<Path>, file_name: &str) -> PathBuf {
    output_dir.as_ref().join(file_name)
}

/// Writes `table` to `path`, replacing any previous file.
pub fn write_table<R: Record>(table: &Table<R>, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(R::COLUMNS)?;
    for row in table.rows() {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(
        "Wrote {} table: {} rows to {}",
        R::TABLE,
        table.len(),
        path.display()
    );
    Ok(())
}

/// Reads a table written by [`write_table`]. The header must match the
/// record's columns exactly, in order.
pub fn read_table<R: Record>(path: &Path) -> Result<Table<R>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let found: Vec<&str> = headers.iter().collect();
    if found != R::COLUMNS {
        return Err(AppError::schema_mismatch(
            R::TABLE,
            path.display().to_string(),
            format!("expected columns {:?}, found {:?}", R::COLUMNS, found),
        ));
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<R>() {
        rows.push(result?);
    }
    debug!("Read {} rows of {} from {}", rows.len(), R::TABLE, path.display());
    Ok(Table::create(rows))
}
