//! File-backed snapshot store.
//!
//! Backs the CLI: a snapshot exported to disk as a JSON array of contact
//! records or as CSV with `id,displayName,phones,emails` columns (phones
//! and emails semicolon-separated within their cell).

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::ContactRecord;
use crate::{Error, Result};

use super::ContactStore;

/// One CSV row of a snapshot file.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    #[serde(default, rename = "displayName")]
    display_name: String,
    #[serde(default)]
    phones: String,
    #[serde(default)]
    emails: String,
}

impl From<CsvRow> for ContactRecord {
    fn from(row: CsvRow) -> Self {
        let mut record = Self::new(row.id, row.display_name, split_cell(&row.phones));
        record.emails = split_cell(&row.emails);
        record
    }
}

/// Splits a semicolon-separated cell, dropping blank entries.
fn split_cell(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Contact store reading a snapshot from a JSON or CSV file.
///
/// The format is chosen by extension: `.json` for a JSON array of
/// records, `.csv` for the columnar form. Anything else is rejected up
/// front rather than guessed at.
#[derive(Debug, Clone)]
pub struct SnapshotFileStore {
    path: PathBuf,
}

impl SnapshotFileStore {
    /// Creates a store reading from the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_json(&self) -> Result<Vec<ContactRecord>> {
        let file = File::open(&self.path).map_err(|e| Error::OperationFailed {
            operation: "snapshot_file_open".to_string(),
            cause: e.to_string(),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::OperationFailed {
            operation: "snapshot_json_parse".to_string(),
            cause: e.to_string(),
        })
    }

    fn read_csv(&self, limit: Option<usize>) -> Result<Vec<ContactRecord>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| Error::OperationFailed {
            operation: "snapshot_file_open".to_string(),
            cause: e.to_string(),
        })?;
        let mut contacts = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            if let Some(cap) = limit {
                if contacts.len() >= cap {
                    break;
                }
            }
            let row = row.map_err(|e| Error::OperationFailed {
                operation: "snapshot_csv_parse".to_string(),
                cause: e.to_string(),
            })?;
            contacts.push(row.into());
        }
        Ok(contacts)
    }
}

impl ContactStore for SnapshotFileStore {
    fn snapshot(&self, limit: Option<usize>) -> Result<Vec<ContactRecord>> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "json" => {
                let mut contacts = self.read_json()?;
                if let Some(cap) = limit {
                    contacts.truncate(cap);
                }
                Ok(contacts)
            }
            "csv" => self.read_csv(limit),
            other => Err(Error::InvalidInput(format!(
                "unsupported snapshot format '{other}' (expected .json or .csv)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_json_snapshot() {
        let file = temp_file(
            ".json",
            r#"[
                {"id":"1","displayName":"Jane Doe","phones":["555-1111"]},
                {"id":"2","displayName":"Mary","phones":[]}
            ]"#,
        );
        let store = SnapshotFileStore::new(file.path());
        let contacts = store.snapshot(None).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].display_name, "Jane Doe");
        assert_eq!(contacts[0].phone_numbers, vec!["555-1111"]);
    }

    #[test]
    fn test_json_snapshot_respects_limit() {
        let file = temp_file(
            ".json",
            r#"[{"id":"1"},{"id":"2"},{"id":"3"}]"#,
        );
        let store = SnapshotFileStore::new(file.path());
        let contacts = store.snapshot(Some(2)).unwrap();
        assert_eq!(contacts.len(), 2);
    }

    #[test]
    fn test_csv_snapshot() {
        let file = temp_file(
            ".csv",
            "id,displayName,phones,emails\n\
             1,Jane Doe,555-1111;555-2222,jane@example.com\n\
             2,Mary,,\n",
        );
        let store = SnapshotFileStore::new(file.path());
        let contacts = store.snapshot(None).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].phone_numbers, vec!["555-1111", "555-2222"]);
        assert_eq!(contacts[0].emails, vec!["jane@example.com"]);
        assert!(contacts[1].phone_numbers.is_empty());
    }

    #[test]
    fn test_csv_snapshot_stops_at_limit() {
        let file = temp_file(
            ".csv",
            "id,displayName,phones,emails\n1,A,,\n2,B,,\n3,C,,\n",
        );
        let store = SnapshotFileStore::new(file.path());
        let contacts = store.snapshot(Some(1)).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id.as_str(), "1");
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let store = SnapshotFileStore::new("snapshot.xml");
        let err = store.snapshot(None).unwrap_err();
        assert!(err.to_string().contains("unsupported snapshot format"));
    }

    #[test]
    fn test_missing_file_is_operation_failed() {
        let store = SnapshotFileStore::new("/nonexistent/snapshot.json");
        let err = store.snapshot(None).unwrap_err();
        assert!(err.to_string().contains("snapshot_file_open"));
    }

    #[test]
    fn test_malformed_json_reported() {
        let file = temp_file(".json", "not json");
        let store = SnapshotFileStore::new(file.path());
        let err = store.snapshot(None).unwrap_err();
        assert!(err.to_string().contains("snapshot_json_parse"));
    }
}
