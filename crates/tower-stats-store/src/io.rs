//! JSON document I/O and atomic file operations

use std::path::Path;

use tower_stats_core::{schema, FieldKind, Record};

use crate::error::{StoreError, StoreResult};

/// Read every record from a backing document
///
/// A missing document is an empty history, not a failure. A document that is
/// not a JSON array is an error. Inside the array, a field whose value does
/// not match its kind falls back to its default, and entries that are not
/// objects are dropped, so one bad session never costs the rest.
pub(crate) fn read_records(path: &Path) -> StoreResult<Vec<Record>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&contents).map_err(|e| StoreError::decode(path, e))?;

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let serde_json::Value::Object(map) = entry else {
            tracing::warn!(index, path = %path.display(), "dropping session that is not an object");
            continue;
        };
        match Record::from_map(map.clone()) {
            Ok(record) => records.push(record),
            Err(_) => {
                let (record, reset) = salvage(map);
                tracing::warn!(
                    index,
                    path = %path.display(),
                    fields = ?reset,
                    "reset mistyped fields to their defaults"
                );
                records.push(record);
            }
        }
    }
    Ok(records)
}

/// Strip values whose JSON type does not fit their field, then rebuild
fn salvage(mut map: serde_json::Map<String, serde_json::Value>) -> (Record, Vec<String>) {
    let mut reset = Vec::new();
    map.retain(|key, value| {
        let fits = match key.as_str() {
            "timestamp" | "session_id" => value.is_string(),
            name => match schema::field_by_name(name).map(|spec| spec.kind) {
                Some(FieldKind::Counter) => value.is_u64(),
                Some(FieldKind::Magnitude | FieldKind::Label) => value.is_string(),
                None => true,
            },
        };
        if !fits {
            reset.push(key.clone());
        }
        fits
    });
    (Record::from_map(map).unwrap_or_default(), reset)
}

/// Replace a backing document with the given records
///
/// Written as an indented JSON array with non-ASCII text kept as-is.
pub(crate) fn write_records(path: &Path, records: &[Record]) -> StoreResult<()> {
    let maps: Vec<_> = records.iter().map(Record::to_map).collect();
    let json = serde_json::to_string_pretty(&maps)?;
    atomic_write(path, json.as_bytes()).map_err(|e| StoreError::write(path, e))
}

/// Write data atomically using temp file + rename
pub(crate) fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}
