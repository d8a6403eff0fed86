//! JSON and JSONL (JSON Lines) decoding.
//!
//! Match history is kept as JSONL, one sample per line. Everything else is
//! a single JSON document.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::StorageError;

/// Decode a single JSON document. A missing file is `PathNotFound`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StorageError::PathNotFound(path.to_path_buf()),
        _ => StorageError::Io(e),
    })?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    debug!(?path, "decoded document");
    Ok(value)
}

/// Decode every line of a JSONL file.
///
/// A missing file yields no rows. Blank lines are ignored; rows that do not
/// decode are logged and dropped.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(?path, "no such log, treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut rows = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str(line) {
            Ok(row) => rows.push(row),
            Err(e) => warn!(?path, line = index + 1, error = %e, "skipping undecodable row"),
        }
    }

    debug!(?path, rows = rows.len(), "decoded log");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        match_id: i64,
        kills: i32,
    }

    #[test]
    fn test_read_jsonl_drops_corrupt_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recent.jsonl");
        fs::write(
            &path,
            "{\"match_id\": 10, \"kills\": 3}\n\n{\"match_id\": oops}\n  {\"match_id\": 11, \"kills\": 0}  \n",
        )
        .unwrap();

        let rows: Vec<Row> = read_jsonl(&path).unwrap();

        assert_eq!(
            rows,
            vec![
                Row { match_id: 10, kills: 3 },
                Row { match_id: 11, kills: 0 },
            ]
        );
    }

    #[test]
    fn test_read_jsonl_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Vec<Row> = read_jsonl(&temp_dir.path().join("historical.jsonl")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("row.json");
        fs::write(&path, r#"{"match_id": 9, "kills": 14}"#).unwrap();

        let row: Row = read_json(&path).unwrap();
        assert_eq!(row, Row { match_id: 9, kills: 14 });

        let missing = read_json::<Row>(&temp_dir.path().join("nope.json"));
        assert!(matches!(missing, Err(StorageError::PathNotFound(_))));

        fs::write(&path, "{").unwrap();
        assert!(matches!(read_json::<Row>(&path), Err(StorageError::Json(_))));
    }
}
