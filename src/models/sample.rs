//! Lightweight per-match samples and pre-aggregated career totals.

use serde::{Deserialize, Serialize};

use super::Side;
use crate::calculate::ratio;

/// Condensed record of one of a player's games, as returned by match
/// history listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSample {
    pub match_id: i64,
    pub player_slot: i32,
    pub radiant_win: bool,

    #[serde(default)]
    pub duration: u32,

    #[serde(default)]
    pub hero_id: i32,

    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,

    #[serde(default)]
    pub start_time: i64,

    /// Average rank of the lobby, when known
    #[serde(default)]
    pub average_rank: Option<i32>,
}

impl MatchSample {
    /// Whether the player's side won this game.
    pub fn is_win(&self) -> bool {
        Side::from_slot(self.player_slot).won(self.radiant_win)
    }

    pub fn ratio(&self) -> f64 {
        ratio::ratio(self.kills, self.deaths, self.assists)
    }
}

/// Per-hero game and win counts for a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroStats {
    pub hero_id: i32,

    #[serde(default)]
    pub last_played: i64,

    #[serde(default)]
    pub games: u32,

    #[serde(default)]
    pub win: u32,
}

impl HeroStats {
    /// Win rate as a fraction (0.0 to 1.0).
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.win) / f64::from(self.games)
        }
    }
}

/// A named career total: number of games `n` and the summed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerTotal {
    pub field: String,
    pub n: u32,
    pub sum: f64,
}

impl PlayerTotal {
    pub fn new(field: impl Into<String>, n: u32, sum: f64) -> Self {
        Self {
            field: field.into(),
            n,
            sum,
        }
    }

    /// Mean value per game.
    pub fn average(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum / f64::from(self.n)
        }
    }
}
