//! Skill tiers and their benchmark targets.

use serde::{Deserialize, Serialize};

/// Ordered skill brackets, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum RankTier {
    Herald,
    Guardian,
    Crusader,
    #[default]
    Archon,
    Legend,
    Ancient,
    Divine,
    Immortal,
}

impl RankTier {
    pub const ALL: [RankTier; 8] = [
        RankTier::Herald,
        RankTier::Guardian,
        RankTier::Crusader,
        RankTier::Archon,
        RankTier::Legend,
        RankTier::Ancient,
        RankTier::Divine,
        RankTier::Immortal,
    ];

    /// Resolve a tier from a numeric rank using fixed decile buckets.
    /// Anything outside 1..=80, or no rank at all, falls back to Archon.
    pub fn from_rank(rank: Option<i32>) -> Self {
        match rank {
            Some(1..=10) => RankTier::Herald,
            Some(11..=20) => RankTier::Guardian,
            Some(21..=30) => RankTier::Crusader,
            Some(31..=40) => RankTier::Archon,
            Some(41..=50) => RankTier::Legend,
            Some(51..=60) => RankTier::Ancient,
            Some(61..=70) => RankTier::Divine,
            Some(71..=80) => RankTier::Immortal,
            _ => RankTier::default(),
        }
    }

    /// Expected last hits per minute for this bracket.
    pub fn target_last_hits_per_min(self) -> f64 {
        match self {
            RankTier::Herald => 3.0,
            RankTier::Guardian => 4.0,
            RankTier::Crusader => 5.0,
            RankTier::Archon => 6.0,
            RankTier::Legend => 7.0,
            RankTier::Ancient => 8.0,
            RankTier::Divine => 9.0,
            RankTier::Immortal => 10.0,
        }
    }

    /// Expected gold per minute for this bracket.
    pub fn target_gold_per_min(self) -> f64 {
        match self {
            RankTier::Herald => 300.0,
            RankTier::Guardian => 350.0,
            RankTier::Crusader => 400.0,
            RankTier::Archon => 450.0,
            RankTier::Legend => 500.0,
            RankTier::Ancient => 550.0,
            RankTier::Divine => 600.0,
            RankTier::Immortal => 650.0,
        }
    }
}

impl std::fmt::Display for RankTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RankTier::Herald => "Herald",
            RankTier::Guardian => "Guardian",
            RankTier::Crusader => "Crusader",
            RankTier::Archon => "Archon",
            RankTier::Legend => "Legend",
            RankTier::Ancient => "Ancient",
            RankTier::Divine => "Divine",
            RankTier::Immortal => "Immortal",
        };
        write!(f, "{}", name)
    }
}
