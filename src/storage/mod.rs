//! Local file store for match data.
//!
//! Stands in for the remote data source. Layout under the data directory (see [`DataLayout`]):
//! - `heroes.json`: hero directory
//! - `matches/{match_id}.json`: full match details
//! - `players/{account_id}/recent.jsonl`: recent match samples
//! - `players/{account_id}/historical.jsonl`: long-window match samples
//! - `players/{account_id}/heroes.json`: per-hero game counts
//! - `players/{account_id}/totals.json`: career totals

mod jsonl;
mod store;

pub use jsonl::*;
pub use store::*;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading stored match data.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored JSON did not decode: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No stored data at {0:?}")]
    PathNotFound(PathBuf),

    #[error("No player in slot {slot} of match {match_id}")]
    PlayerNotInMatch { match_id: i64, slot: i32 },
}

/// File layout of a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn heroes_path(&self) -> PathBuf {
        self.root.join("heroes.json")
    }

    pub fn matches_dir(&self) -> PathBuf {
        self.root.join("matches")
    }

    pub fn match_path(&self, match_id: i64) -> PathBuf {
        self.matches_dir().join(format!("{}.json", match_id))
    }

    pub fn player_dir(&self, account_id: i64) -> PathBuf {
        self.root.join("players").join(account_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = DataLayout::new("/srv/coach");

        assert_eq!(layout.root(), Path::new("/srv/coach"));
        assert_eq!(layout.heroes_path(), PathBuf::from("/srv/coach/heroes.json"));
        assert_eq!(layout.match_path(7_412_345_678), PathBuf::from("/srv/coach/matches/7412345678.json"));
        assert_eq!(layout.player_dir(86745912), PathBuf::from("/srv/coach/players/86745912"));
    }

    #[test]
    fn test_missing_player_message() {
        let err = StorageError::PlayerNotInMatch {
            match_id: 42,
            slot: 131,
        };
        assert_eq!(err.to_string(), "No player in slot 131 of match 42");
    }
}
