//! Single-match performance analysis.
//!
//! Scores a player's game across five dimensions, combines them into an
//! overall score, and derives strengths, weaknesses, coaching
//! recommendations and a comparison against rank-tier benchmarks.
//!
//! Every rate is normalized per minute of game time. A zero-length game
//! yields zero rates rather than dividing by zero.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::models::{
    BenchmarkComparison, KeyMetrics, MatchRecord, PerformanceAnalysis, PlayerRecord, Priority,
    RankTier, Recommendation, RecommendationCategory,
};

/// Denies per minute worth the full denies component.
pub const TARGET_DENIES_PER_MIN: f64 = 1.5;

/// Ratio treated as 100% fight participation.
pub const BASELINE_FIGHT_RATIO: f64 = 2.0;

/// Vision score reported while no ward data exists.
pub const VISION_SCORE_PLACEHOLDER: f64 = 75.0;

/// Items that count as core for any hero.
pub const CORE_ITEMS: [i32; 4] = [1, 116, 152, 63];

/// Items that indicate a situational purchase.
pub const SITUATIONAL_ITEMS: [i32; 3] = [116, 108, 152];

/// Dimension score at or above which a strength is named.
const STRENGTH_THRESHOLD: f64 = 80.0;
/// Fallback strength threshold when nothing reaches [`STRENGTH_THRESHOLD`].
const SOLID_THRESHOLD: f64 = 65.0;
/// Dimension score below which a weakness is named.
const WEAKNESS_THRESHOLD: f64 = 60.0;
/// Dimension score below which a recommendation is emitted.
const RECOMMENDATION_THRESHOLD: f64 = 70.0;

/// Per-minute rates for one player in one game.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rates {
    minutes: f64,
    last_hits: f64,
    denies: f64,
    kills: f64,
    deaths: f64,
}

fn per_minute(count: u32, minutes: f64) -> f64 {
    if minutes > 0.0 {
        f64::from(count) / minutes
    } else {
        0.0
    }
}

impl Rates {
    fn new(player: &PlayerRecord, minutes: f64) -> Self {
        Self {
            minutes,
            last_hits: per_minute(player.last_hits, minutes),
            denies: per_minute(player.denies, minutes),
            kills: per_minute(player.kills, minutes),
            deaths: per_minute(player.deaths, minutes),
        }
    }
}

/// Analyze one player's performance in a match.
///
/// `rank` is the numeric rank used to pick benchmark targets; `None` falls
/// back to the default tier.
pub fn analyze(record: &MatchRecord, player: &PlayerRecord, rank: Option<i32>) -> PerformanceAnalysis {
    let tier = RankTier::from_rank(rank);
    let rates = Rates::new(player, record.duration_minutes());

    let key_metrics = KeyMetrics {
        farming_efficiency: farming_score(rates.last_hits, rates.denies, tier),
        combat_performance: combat_score(player.ratio(), rates.kills, rates.deaths),
        economy_score: economy_score(player),
        itemization_score: itemization_score(&player.items()),
        map_awareness: map_awareness_score(rates.deaths, player.assists),
    };

    let overall_score = key_metrics.overall();

    debug!(
        "Analyzed match {} slot {} ({} tier): overall {:.1}",
        record.match_id, player.player_slot, tier, overall_score
    );

    PerformanceAnalysis {
        match_id: record.match_id,
        player_slot: player.player_slot,
        overall_score,
        strengths: identify_strengths(&key_metrics),
        weaknesses: identify_weaknesses(&key_metrics),
        recommendations: generate_recommendations(player, &rates, &key_metrics),
        benchmark_comparison: benchmark_comparison(player, &rates, tier),
        key_metrics,
    }
}

/// Farming score from last hits and denies per minute against a tier target.
pub fn farming_score(last_hits_per_min: f64, denies_per_min: f64, tier: RankTier) -> f64 {
    let target = tier.target_last_hits_per_min();
    let excellent = target * 1.3;
    let good = target * 1.1;

    let last_hit_points = if last_hits_per_min >= excellent {
        75.0
    } else if last_hits_per_min >= good {
        75.0 * (last_hits_per_min / excellent)
    } else if last_hits_per_min >= target {
        60.0 * (last_hits_per_min / good)
    } else {
        40.0 * (last_hits_per_min / target)
    };

    let deny_points = (denies_per_min / TARGET_DENIES_PER_MIN * 25.0).min(25.0);

    (last_hit_points + deny_points).min(100.0)
}

fn ratio_points(ratio: f64) -> f64 {
    match ratio {
        r if r >= 4.0 => 40.0,
        r if r >= 3.0 => 38.0,
        r if r >= 2.5 => 35.0,
        r if r >= 2.0 => 32.0,
        r if r >= 1.5 => 28.0,
        r if r >= 1.0 => 24.0,
        _ => 15.0,
    }
}

/// Points for staying alive, stepped by deaths per minute. `points` lists
/// the award for <=0.15, <=0.25, <=0.35, <=0.5 and anything above.
fn survival_points(deaths_per_min: f64, points: [f64; 5]) -> f64 {
    if deaths_per_min <= 0.15 {
        points[0]
    } else if deaths_per_min <= 0.25 {
        points[1]
    } else if deaths_per_min <= 0.35 {
        points[2]
    } else if deaths_per_min <= 0.5 {
        points[3]
    } else {
        points[4]
    }
}

/// Combat score from ratio, kill rate and death rate.
pub fn combat_score(ratio: f64, kills_per_min: f64, deaths_per_min: f64) -> f64 {
    let kill_points = if kills_per_min >= 0.6 {
        30.0
    } else if kills_per_min >= 0.4 {
        25.0
    } else if kills_per_min >= 0.3 {
        20.0
    } else {
        15.0 * (kills_per_min / 0.3)
    };

    let score = ratio_points(ratio)
        + kill_points
        + survival_points(deaths_per_min, [30.0, 25.0, 20.0, 15.0, 10.0]);

    score.min(100.0)
}

/// Share of earned gold that was spent, 0.0 when nothing was earned.
fn gold_spend_efficiency(player: &PlayerRecord) -> f64 {
    let earned = f64::from(player.gold) + f64::from(player.gold_spent);
    if earned > 0.0 {
        f64::from(player.gold_spent) / earned
    } else {
        0.0
    }
}

/// Economy score from GPM, XPM and how much gold was put to use.
pub fn economy_score(player: &PlayerRecord) -> f64 {
    let gpm = f64::from(player.gold_per_min);
    let xpm = f64::from(player.xp_per_min);
    let efficiency = gold_spend_efficiency(player);

    let gpm_points = if gpm >= 650.0 {
        50.0
    } else if gpm >= 550.0 {
        45.0
    } else if gpm >= 450.0 {
        40.0
    } else if gpm >= 350.0 {
        30.0
    } else {
        20.0 * (gpm / 350.0)
    };

    let xpm_points = if xpm >= 650.0 {
        30.0
    } else if xpm >= 550.0 {
        25.0
    } else if xpm >= 450.0 {
        20.0
    } else {
        15.0 * (xpm / 450.0)
    };

    let efficiency_points = if efficiency >= 0.9 {
        20.0
    } else {
        20.0 * efficiency
    };

    (gpm_points + xpm_points + efficiency_points).min(100.0)
}

/// Coarse item tier by id range.
fn item_bucket(item_id: i32) -> u8 {
    match item_id {
        1..=50 => 0,
        51..=100 => 1,
        101..=200 => 2,
        _ => 3,
    }
}

/// Itemization score from slot usage and a few fixed item lists.
///
/// The lists apply to every hero alike; there is no per-hero build data.
pub fn itemization_score(items: &[i32]) -> f64 {
    let equipped: Vec<i32> = items.iter().copied().filter(|&id| id > 0).collect();

    let slot_points = equipped.len() as f64 * 5.0;

    let core_points = if equipped.iter().any(|id| CORE_ITEMS.contains(id)) {
        40.0
    } else {
        20.0
    };

    let buckets: BTreeSet<u8> = equipped.iter().map(|&id| item_bucket(id)).collect();
    let diversity_points = (buckets.len() as f64 * 3.0).min(15.0);

    let situational_points = if equipped.iter().any(|id| SITUATIONAL_ITEMS.contains(id)) {
        15.0
    } else {
        5.0
    };

    (slot_points + core_points + diversity_points + situational_points).min(100.0)
}

/// Map awareness score from death rate and assists.
pub fn map_awareness_score(deaths_per_min: f64, assists: u32) -> f64 {
    let survival = survival_points(deaths_per_min, [60.0, 50.0, 40.0, 30.0, 20.0]);
    let assist_points = (f64::from(assists) * 2.0).min(40.0);

    (survival + assist_points).min(100.0)
}

/// Named strengths. Falls back to "solid" labels for farming, combat and
/// economy when no dimension is excellent.
pub fn identify_strengths(metrics: &KeyMetrics) -> Vec<String> {
    let excellent = [
        (metrics.farming_efficiency, "Excellent farming efficiency"),
        (metrics.combat_performance, "Outstanding combat performance"),
        (metrics.economy_score, "Strong economic development"),
        (metrics.itemization_score, "Smart item choices"),
        (metrics.map_awareness, "Great map awareness"),
    ];

    let strengths: Vec<String> = excellent
        .iter()
        .filter(|(score, _)| *score >= STRENGTH_THRESHOLD)
        .map(|(_, label)| label.to_string())
        .collect();

    if !strengths.is_empty() {
        return strengths;
    }

    let solid = [
        (metrics.farming_efficiency, "Solid farming fundamentals"),
        (metrics.combat_performance, "Good team fight participation"),
        (metrics.economy_score, "Decent economic growth"),
    ];

    solid
        .iter()
        .filter(|(score, _)| *score >= SOLID_THRESHOLD)
        .map(|(_, label)| label.to_string())
        .collect()
}

/// Named weaknesses, one per dimension below the weakness line.
pub fn identify_weaknesses(metrics: &KeyMetrics) -> Vec<String> {
    let labels = [
        (metrics.farming_efficiency, "Farming efficiency needs improvement"),
        (metrics.combat_performance, "Combat effectiveness could be better"),
        (metrics.economy_score, "Economic development is lagging"),
        (metrics.itemization_score, "Item choices need optimization"),
        (metrics.map_awareness, "Map awareness requires attention"),
    ];

    labels
        .iter()
        .filter(|(score, _)| *score < WEAKNESS_THRESHOLD)
        .map(|(_, label)| label.to_string())
        .collect()
}

fn generate_recommendations(
    player: &PlayerRecord,
    rates: &Rates,
    metrics: &KeyMetrics,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if metrics.farming_efficiency < RECOMMENDATION_THRESHOLD {
        let target_cs = (6.0 * rates.minutes).round();
        recommendations.push(Recommendation {
            category: RecommendationCategory::Farming,
            title: "Improve Last-Hit Efficiency".to_string(),
            description: format!(
                "Current CS per minute: {:.1}. Aim for 6+ CS per minute.",
                rates.last_hits
            ),
            priority: if rates.last_hits < 4.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            actionable: "Practice last-hitting in demo mode. Focus on timing and positioning."
                .to_string(),
            target_value: Some(format!(
                "{:.0} total CS in a {:.0}-minute game",
                target_cs,
                rates.minutes.floor()
            )),
        });
    }

    if metrics.combat_performance < RECOMMENDATION_THRESHOLD {
        let ratio = player.ratio();
        recommendations.push(Recommendation {
            category: RecommendationCategory::Positioning,
            title: "Improve Survival and KDA".to_string(),
            description: format!(
                "Current KDA: {:.2}. Focus on positioning and decision-making.",
                ratio
            ),
            priority: if ratio < 2.0 {
                Priority::High
            } else {
                Priority::Medium
            },
            actionable:
                "Stay further back in fights. Only engage when you have backup or clear advantage."
                    .to_string(),
            target_value: Some("KDA ratio above 2.0".to_string()),
        });
    }

    if metrics.economy_score < RECOMMENDATION_THRESHOLD {
        recommendations.push(Recommendation {
            category: RecommendationCategory::Economy,
            title: "Boost Economic Efficiency".to_string(),
            description: format!(
                "Current GPM: {}. Target 450+ GPM for consistent impact.",
                player.gold_per_min
            ),
            priority: if player.gold_per_min < 450 {
                Priority::Medium
            } else {
                Priority::Low
            },
            actionable:
                "Balance farming and fighting. Use efficient farming patterns between fights."
                    .to_string(),
            target_value: Some("450+ GPM".to_string()),
        });
    }

    if metrics.map_awareness < RECOMMENDATION_THRESHOLD {
        recommendations.push(Recommendation {
            category: RecommendationCategory::MapAwareness,
            title: "Reduce Unnecessary Deaths".to_string(),
            description: format!(
                "Dying {:.1} times per minute. Improve map awareness.",
                rates.deaths
            ),
            priority: if rates.deaths > 0.3 {
                Priority::High
            } else {
                Priority::Medium
            },
            actionable: "Check minimap every 3-5 seconds. Buy wards and avoid farming alone."
                .to_string(),
            target_value: Some("Less than 5 deaths per game".to_string()),
        });
    }

    recommendations
}

fn benchmark_comparison(player: &PlayerRecord, rates: &Rates, tier: RankTier) -> BenchmarkComparison {
    let farming_efficiency = rates.last_hits / tier.target_last_hits_per_min() * 100.0;
    let economy_efficiency = f64::from(player.gold_per_min) / tier.target_gold_per_min() * 100.0;
    let fight_participation = player.ratio() / BASELINE_FIGHT_RATIO * 100.0;

    BenchmarkComparison {
        farming_efficiency,
        fight_participation,
        vision_score: VISION_SCORE_PLACEHOLDER,
        item_timings: BTreeMap::new(),
        economy_efficiency,
    }
}
