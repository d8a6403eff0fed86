//! Career-level summaries derived from a player's match history.

use serde::{Deserialize, Serialize};

/// Direction of a metric between the older and newer half of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Improving => write!(f, "improving"),
            TrendDirection::Declining => write!(f, "declining"),
            TrendDirection::Stable => write!(f, "stable"),
        }
    }
}

/// Change between the recent and older halves of a match window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTrend {
    /// Mean per-game ratio, recent minus older
    pub ratio_delta: f64,

    /// Win rate, recent minus older, in percentage points
    pub win_rate_delta: f64,

    pub direction: TrendDirection,
}

/// A hero picked out of the player's hero pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroHighlight {
    pub name: String,
    pub games: u32,

    /// Win rate (0.0 to 1.0)
    pub win_rate: f64,
}

impl HeroHighlight {
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    /// Placeholder used when no hero qualifies.
    pub fn unknown() -> Self {
        Self {
            name: Self::UNKNOWN_NAME.to_string(),
            games: 0,
            win_rate: 0.0,
        }
    }
}

/// Aggregate view of a player's recent and historical games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSummary {
    /// Number of recent games the summary is based on
    pub sample_size: usize,

    /// Win rate over recent games (0.0 to 1.0)
    pub win_rate: f64,

    pub average_ratio: f64,
    pub best_ratio: f64,
    pub career_average_ratio: f64,
    pub career_average_gpm: f64,

    pub most_played_hero: HeroHighlight,
    pub best_hero: HeroHighlight,

    /// Ratio stability (0 to 100)
    pub consistency: f64,

    /// Composite of win rate, ratio and consistency (0 to 100)
    pub composite_score: f64,

    pub trend: Option<PerformanceTrend>,
}
