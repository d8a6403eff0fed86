//! Match and per-player telemetry as supplied by the data source.

use serde::{Deserialize, Serialize};

use crate::calculate::ratio;

/// Player slots below this value belong to the Radiant side.
pub const DIRE_SLOT_OFFSET: i32 = 128;

/// Team side a player slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Radiant,
    Dire,
}

impl Side {
    /// Side for a raw player slot.
    pub fn from_slot(player_slot: i32) -> Self {
        if player_slot < DIRE_SLOT_OFFSET {
            Side::Radiant
        } else {
            Side::Dire
        }
    }

    /// Whether this side won, given the match outcome flag.
    pub fn won(self, radiant_win: bool) -> bool {
        (self == Side::Radiant) == radiant_win
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Radiant => write!(f, "Radiant"),
            Side::Dire => write!(f, "Dire"),
        }
    }
}

/// A single completed game with full per-player detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: i64,

    /// Length of the game in seconds
    #[serde(default)]
    pub duration: u32,

    #[serde(default)]
    pub game_mode: i32,

    pub radiant_win: bool,

    /// Unix timestamp of the game start
    #[serde(default)]
    pub start_time: i64,

    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

impl MatchRecord {
    /// Duration expressed in minutes.
    pub fn duration_minutes(&self) -> f64 {
        f64::from(self.duration) / 60.0
    }

    /// Find the participant occupying the given slot.
    pub fn player_by_slot(&self, player_slot: i32) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.player_slot == player_slot)
    }
}

/// One participant's raw telemetry within a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub player_slot: i32,

    #[serde(default)]
    pub account_id: Option<i64>,

    #[serde(default)]
    pub hero_id: i32,

    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,

    #[serde(default)]
    pub last_hits: u32,
    #[serde(default)]
    pub denies: u32,

    #[serde(default)]
    pub gold_per_min: u32,
    #[serde(default)]
    pub xp_per_min: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub net_worth: u32,

    #[serde(default)]
    pub hero_damage: u32,
    #[serde(default)]
    pub tower_damage: u32,
    #[serde(default)]
    pub hero_healing: u32,

    /// Unspent gold at the end of the game
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub gold_spent: u32,

    #[serde(default)]
    pub item_0: i32,
    #[serde(default)]
    pub item_1: i32,
    #[serde(default)]
    pub item_2: i32,
    #[serde(default)]
    pub item_3: i32,
    #[serde(default)]
    pub item_4: i32,
    #[serde(default)]
    pub item_5: i32,
}

impl PlayerRecord {
    pub fn side(&self) -> Side {
        Side::from_slot(self.player_slot)
    }

    pub fn is_radiant(&self) -> bool {
        self.side() == Side::Radiant
    }

    /// Whether this player's side won the match.
    pub fn is_win(&self, radiant_win: bool) -> bool {
        self.is_radiant() == radiant_win
    }

    /// Kill/death/assist ratio for this game.
    pub fn ratio(&self) -> f64 {
        ratio::ratio(self.kills, self.deaths, self.assists)
    }

    /// The six main inventory slots (0 means empty).
    pub fn items(&self) -> [i32; 6] {
        [
            self.item_0,
            self.item_1,
            self.item_2,
            self.item_3,
            self.item_4,
            self.item_5,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_slot() {
        assert_eq!(Side::from_slot(0), Side::Radiant);
        assert_eq!(Side::from_slot(4), Side::Radiant);
        assert_eq!(Side::from_slot(127), Side::Radiant);
        assert_eq!(Side::from_slot(128), Side::Dire);
        assert_eq!(Side::from_slot(132), Side::Dire);
    }

    #[test]
    fn test_is_win_against_both_outcomes() {
        let radiant = PlayerRecord {
            player_slot: 0,
            ..Default::default()
        };
        let dire = PlayerRecord {
            player_slot: 128,
            ..Default::default()
        };

        assert!(radiant.is_radiant());
        assert!(!dire.is_radiant());

        assert!(radiant.is_win(true));
        assert!(!radiant.is_win(false));
        assert!(!dire.is_win(true));
        assert!(dire.is_win(false));
    }

    #[test]
    fn test_player_by_slot() {
        let record = MatchRecord {
            match_id: 7,
            duration: 1800,
            game_mode: 22,
            radiant_win: true,
            start_time: 0,
            players: vec![
                PlayerRecord {
                    player_slot: 0,
                    hero_id: 1,
                    ..Default::default()
                },
                PlayerRecord {
                    player_slot: 130,
                    hero_id: 74,
                    ..Default::default()
                },
            ],
        };

        assert_eq!(record.player_by_slot(130).map(|p| p.hero_id), Some(74));
        assert!(record.player_by_slot(3).is_none());
        assert_eq!(record.duration_minutes(), 30.0);
    }

    #[test]
    fn test_missing_optional_fields_default_to_zero() {
        let json = r#"{"match_id": 1, "radiant_win": false, "players": [{"player_slot": 129, "kills": 4}]}"#;
        let record: MatchRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.duration, 0);
        let player = &record.players[0];
        assert_eq!(player.kills, 4);
        assert_eq!(player.deaths, 0);
        assert_eq!(player.items(), [0; 6]);
        assert_eq!(player.account_id, None);
        assert!(player.is_win(false));
    }
}
