//! Output of a single-match performance analysis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weight of each dimension in the overall score:
/// farming, combat, economy, itemization, map awareness.
pub const METRIC_WEIGHTS: [f64; 5] = [0.25, 0.25, 0.20, 0.15, 0.15];

/// Five independent dimension scores, each in 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub farming_efficiency: f64,
    pub combat_performance: f64,
    pub economy_score: f64,
    pub itemization_score: f64,
    pub map_awareness: f64,
}

impl KeyMetrics {
    /// Scores in the same order as [`METRIC_WEIGHTS`].
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.farming_efficiency,
            self.combat_performance,
            self.economy_score,
            self.itemization_score,
            self.map_awareness,
        ]
    }

    /// Fixed-weight combination of the five scores.
    pub fn overall(&self) -> f64 {
        METRIC_WEIGHTS
            .iter()
            .zip(self.as_array())
            .map(|(weight, score)| weight * score)
            .sum()
    }
}

/// Coaching area a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Farming,
    Itemization,
    Positioning,
    Timing,
    Teamfight,
    Vision,
    Economy,
    MapAwareness,
}

impl std::fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationCategory::Farming => write!(f, "Farming"),
            RecommendationCategory::Itemization => write!(f, "Itemization"),
            RecommendationCategory::Positioning => write!(f, "Positioning"),
            RecommendationCategory::Timing => write!(f, "Timing"),
            RecommendationCategory::Teamfight => write!(f, "Team Fighting"),
            RecommendationCategory::Vision => write!(f, "Vision"),
            RecommendationCategory::Economy => write!(f, "Economy"),
            RecommendationCategory::MapAwareness => write!(f, "Map Awareness"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// A single coaching suggestion with a measurable goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,

    /// What to practice
    pub actionable: String,

    /// Measurable target, e.g. "240 total CS in a 40-minute game"
    pub target_value: Option<String>,
}

/// Player value against a benchmark for one item timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub player_value: f64,
    pub benchmark_value: f64,
    pub percentile: f64,
    pub is_good: bool,
    pub improvement_tip: Option<String>,
}

/// Efficiencies relative to the player's rank tier, in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub farming_efficiency: f64,
    pub fight_participation: f64,

    /// Placeholder: no ward data is available
    pub vision_score: f64,

    /// Always empty: no purchase timing data is available
    pub item_timings: BTreeMap<String, ComparisonResult>,

    pub economy_efficiency: f64,
}

/// Complete evaluation of one player's match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysis {
    pub match_id: i64,
    pub player_slot: i32,

    /// Weighted overall score (0 to 100)
    pub overall_score: f64,

    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub benchmark_comparison: BenchmarkComparison,
    pub key_metrics: KeyMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> KeyMetrics {
        KeyMetrics {
            farming_efficiency: score,
            combat_performance: score,
            economy_score: score,
            itemization_score: score,
            map_awareness: score,
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = METRIC_WEIGHTS.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overall_bounds() {
        assert!((uniform(100.0).overall() - 100.0).abs() < 1e-9);
        assert_eq!(uniform(0.0).overall(), 0.0);
    }

    #[test]
    fn test_overall_weighting() {
        let metrics = KeyMetrics {
            farming_efficiency: 80.0,
            combat_performance: 60.0,
            economy_score: 50.0,
            itemization_score: 40.0,
            map_awareness: 100.0,
        };
        // 20 + 15 + 10 + 6 + 15
        assert!((metrics.overall() - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(RecommendationCategory::Teamfight.to_string(), "Team Fighting");
        assert_eq!(RecommendationCategory::MapAwareness.to_string(), "Map Awareness");
    }

    #[test]
    fn test_priority_serialization() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let deserialized: Priority = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(deserialized, Priority::Low);
    }
}
