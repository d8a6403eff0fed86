//! File-backed match data source.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::{read_json, read_jsonl, DataLayout, StorageError};
use crate::heroes::{Hero, HeroDirectory};
use crate::models::{HeroStats, MatchRecord, MatchSample, PlayerRecord, PlayerTotal};

/// Everything stored for one account.
#[derive(Debug, Clone, Default)]
pub struct PlayerHistory {
    /// Newest first
    pub recent: Vec<MatchSample>,
    pub historical: Vec<MatchSample>,
    pub hero_stats: Vec<HeroStats>,
    pub totals: Vec<PlayerTotal>,
}

/// Reads match data from the local data directory.
#[derive(Debug, Clone)]
pub struct MatchStore {
    layout: DataLayout,
}

/// Read a JSON list, treating a missing file as empty.
fn read_optional_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    match read_json(path) {
        Ok(list) => Ok(list),
        Err(StorageError::PathNotFound(_)) => {
            debug!("{:?} not found, using empty list", path);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

impl MatchStore {
    pub fn new(layout: DataLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DataLayout {
        &self.layout
    }

    /// Load full details for one match.
    pub fn load_match(&self, match_id: i64) -> Result<MatchRecord, StorageError> {
        let record: MatchRecord = read_json(&self.layout.match_path(match_id))?;
        info!(
            "Loaded match {} ({} players, {}s)",
            record.match_id,
            record.players.len(),
            record.duration
        );
        Ok(record)
    }

    /// Load the hero directory. A missing file gives an empty directory.
    pub fn load_heroes(&self) -> Result<HeroDirectory, StorageError> {
        let heroes: Vec<Hero> = read_optional_list(&self.layout.heroes_path())?;
        Ok(HeroDirectory::new(heroes))
    }

    /// Load match history, hero stats and totals for an account.
    pub fn load_player_history(&self, account_id: i64) -> Result<PlayerHistory, StorageError> {
        let dir = self.layout.player_dir(account_id);

        let history = PlayerHistory {
            recent: read_jsonl(&dir.join("recent.jsonl"))?,
            historical: read_jsonl(&dir.join("historical.jsonl"))?,
            hero_stats: read_optional_list(&dir.join("heroes.json"))?,
            totals: read_optional_list(&dir.join("totals.json"))?,
        };

        info!(
            "Loaded history for {}: {} recent, {} historical, {} heroes, {} totals",
            account_id,
            history.recent.len(),
            history.historical.len(),
            history.hero_stats.len(),
            history.totals.len()
        );
        Ok(history)
    }
}

/// Find the player in `slot`, or report that the match has no such player.
pub fn find_player(record: &MatchRecord, slot: i32) -> Result<&PlayerRecord, StorageError> {
    record
        .player_by_slot(slot)
        .ok_or(StorageError::PlayerNotInMatch {
            match_id: record.match_id,
            slot,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heroes::{HeroNameResolver, UNKNOWN_HERO};
    use std::fs;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> MatchStore {
        MatchStore::new(DataLayout::new(temp_dir.path()))
    }

    #[test]
    fn test_load_match_and_find_player() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        fs::create_dir_all(store.layout().matches_dir()).unwrap();
        fs::write(
            store.layout().match_path(99),
            r#"{"match_id": 99, "duration": 2100, "radiant_win": false,
                "players": [{"player_slot": 0, "kills": 3}, {"player_slot": 128, "kills": 9}]}"#,
        )
        .unwrap();

        let record = store.load_match(99).unwrap();
        assert_eq!(record.duration, 2100);

        let player = find_player(&record, 128).unwrap();
        assert_eq!(player.kills, 9);
        assert!(player.is_win(record.radiant_win));

        let missing = find_player(&record, 4);
        assert!(matches!(
            missing,
            Err(StorageError::PlayerNotInMatch {
                match_id: 99,
                slot: 4
            })
        ));
    }

    #[test]
    fn test_load_missing_match() {
        let temp_dir = TempDir::new().unwrap();
        let result = store(&temp_dir).load_match(1);
        assert!(matches!(result, Err(StorageError::PathNotFound(_))));
    }

    #[test]
    fn test_load_heroes() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        assert!(store.load_heroes().unwrap().is_empty());

        fs::write(
            store.layout().heroes_path(),
            r#"[{"id": 2, "name": "npc_dota_hero_axe", "localized_name": "Axe"}]"#,
        )
        .unwrap();
        let heroes = store.load_heroes().unwrap();
        assert_eq!(heroes.hero_name(2), "Axe");
        assert_eq!(heroes.hero_name(3), UNKNOWN_HERO);
    }

    #[test]
    fn test_load_player_history() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let dir = store.layout().player_dir(555);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("recent.jsonl"),
            concat!(
                r#"{"match_id": 2, "player_slot": 1, "radiant_win": true, "kills": 5, "deaths": 2, "assists": 7}"#,
                "\n",
                r#"{"match_id": 1, "player_slot": 129, "radiant_win": true, "kills": 1, "deaths": 6, "assists": 2}"#,
                "\n"
            ),
        )
        .unwrap();
        fs::write(
            dir.join("totals.json"),
            r#"[{"field": "kda", "n": 10, "sum": 25.0}]"#,
        )
        .unwrap();

        let history = store.load_player_history(555).unwrap();

        assert_eq!(history.recent.len(), 2);
        assert!(history.recent[0].is_win());
        assert!(!history.recent[1].is_win());
        assert!(history.historical.is_empty());
        assert!(history.hero_stats.is_empty());
        assert_eq!(history.totals[0].average(), 2.5);
    }

    #[test]
    fn test_corrupt_totals_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let dir = store.layout().player_dir(7);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("totals.json"), "{not json").unwrap();

        assert!(matches!(
            store.load_player_history(7),
            Err(StorageError::Json(_))
        ));
    }
}
