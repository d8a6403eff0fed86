//! Session and career level statistics over many games.

use crate::heroes::HeroNameResolver;
use crate::models::{CareerSummary, HeroHighlight, HeroStats, MatchSample, PlayerTotal};

use super::{ratio, trend};

/// Minimum games on a hero before its win rate is considered.
pub const BEST_HERO_MIN_GAMES: u32 = 5;

/// Fraction of games won (0.0 to 1.0).
pub fn win_rate(samples: &[MatchSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let wins = samples.iter().filter(|s| s.is_win()).count();
    wins as f64 / samples.len() as f64
}

/// First element with the strictly largest key.
fn first_max_by<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Option<T>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let value = key(&item);
        let replace = match &best {
            Some((_, best_value)) => value > *best_value,
            None => true,
        };
        if replace {
            best = Some((item, value));
        }
    }
    best.map(|(item, _)| item)
}

fn highlight(hero: &HeroStats, resolver: &dyn HeroNameResolver) -> HeroHighlight {
    HeroHighlight {
        name: resolver.hero_name(hero.hero_id),
        games: hero.games,
        win_rate: hero.win_rate(),
    }
}

/// Hero with the most games played.
pub fn most_played_hero(hero_stats: &[HeroStats], resolver: &dyn HeroNameResolver) -> HeroHighlight {
    first_max_by(hero_stats, |h| f64::from(h.games))
        .map(|h| highlight(h, resolver))
        .unwrap_or_else(HeroHighlight::unknown)
}

/// Hero with the highest win rate among those with enough games.
pub fn best_hero(hero_stats: &[HeroStats], resolver: &dyn HeroNameResolver) -> HeroHighlight {
    let qualified = hero_stats
        .iter()
        .filter(|h| h.games >= BEST_HERO_MIN_GAMES);

    first_max_by(qualified, |h| h.win_rate())
        .map(|h| highlight(h, resolver))
        .unwrap_or_else(HeroHighlight::unknown)
}

/// Stability of per-game ratio, 0 to 100. Lower spread scores higher.
pub fn consistency_score(samples: &[MatchSample]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }

    let ratios: Vec<f64> = samples.iter().map(MatchSample::ratio).collect();
    let count = ratios.len() as f64;
    let mean = ratios.iter().sum::<f64>() / count;
    let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / count;

    (100.0 - variance.sqrt() * 20.0).max(0.0)
}

/// Blend of win rate (40%), ratio (30%) and consistency (30%), 0 to 100.
pub fn composite_score(samples: &[MatchSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let win_rate_score = win_rate(samples) * 100.0;
    let ratio_score = (ratio::average_ratio(samples) * 20.0).min(100.0);
    let consistency = consistency_score(samples);

    win_rate_score * 0.4 + ratio_score * 0.3 + consistency * 0.3
}

/// Full career summary for a player.
pub fn career_summary(
    recent: &[MatchSample],
    historical: &[MatchSample],
    hero_stats: &[HeroStats],
    totals: &[PlayerTotal],
    resolver: &dyn HeroNameResolver,
) -> CareerSummary {
    CareerSummary {
        sample_size: recent.len(),
        win_rate: win_rate(recent),
        average_ratio: ratio::average_ratio(recent),
        best_ratio: ratio::career_best_ratio(historical, recent),
        career_average_ratio: ratio::career_average_ratio(totals),
        career_average_gpm: ratio::career_average_gpm(totals),
        most_played_hero: most_played_hero(hero_stats, resolver),
        best_hero: best_hero(hero_stats, resolver),
        consistency: consistency_score(recent),
        composite_score: composite_score(recent),
        trend: trend::performance_trend(recent),
    }
}
