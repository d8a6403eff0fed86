//! Kill/death/assist ratio calculations.

use tracing::debug;

use crate::models::{MatchSample, PlayerTotal};

/// Hero id reported when there is no sample to take a best ratio from.
pub const SENTINEL_HERO_ID: i32 = 1;

/// `(kills + assists) / deaths`, or `kills + assists` when there were no deaths.
pub fn ratio(kills: u32, deaths: u32, assists: u32) -> f64 {
    takedown_ratio(f64::from(kills) + f64::from(assists), f64::from(deaths))
}

fn takedown_ratio(takedowns: f64, deaths: f64) -> f64 {
    if deaths == 0.0 {
        takedowns
    } else {
        takedowns / deaths
    }
}

/// Ratio over a set of games, computed from the summed counters.
pub fn average_ratio(samples: &[MatchSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let (kills, deaths, assists) = samples.iter().fold((0u64, 0u64, 0u64), |(k, d, a), s| {
        (
            k + u64::from(s.kills),
            d + u64::from(s.deaths),
            a + u64::from(s.assists),
        )
    });

    takedown_ratio((kills + assists) as f64, deaths as f64)
}

/// Highest single-game ratio and the hero it was played on.
pub fn best_ratio(samples: &[MatchSample]) -> (f64, i32) {
    let mut best: Option<&MatchSample> = None;
    let mut best_value = 0.0;

    for sample in samples {
        let value = sample.ratio();
        if best.is_none() || value > best_value {
            best = Some(sample);
            best_value = value;
        }
    }

    match best {
        Some(sample) => {
            debug!(
                "Best ratio {:.2} from match {} ({}/{}/{})",
                best_value, sample.match_id, sample.kills, sample.deaths, sample.assists
            );
            (best_value, sample.hero_id)
        }
        None => (0.0, SENTINEL_HERO_ID),
    }
}

/// Best single-game ratio, preferring the long historical window over the
/// recent one.
pub fn career_best_ratio(historical: &[MatchSample], recent: &[MatchSample]) -> f64 {
    if !historical.is_empty() {
        return best_ratio(historical).0;
    }

    if !recent.is_empty() {
        debug!("No historical matches, falling back to {} recent matches", recent.len());
        return best_ratio(recent).0;
    }

    debug!("No match data available for best ratio");
    0.0
}

fn find_total<'a>(totals: &'a [PlayerTotal], field: &str) -> Option<&'a PlayerTotal> {
    totals.iter().find(|t| t.field == field)
}

/// Career ratio from pre-aggregated totals.
///
/// A `kda` total is authoritative when present. Otherwise the ratio is
/// rebuilt from the `kills`, `deaths` and `assists` sums.
pub fn career_average_ratio(totals: &[PlayerTotal]) -> f64 {
    if let Some(kda) = find_total(totals, "kda") {
        debug!("Using kda total: n={} sum={}", kda.n, kda.sum);
        return kda.average();
    }

    let (Some(kills), Some(deaths), Some(assists)) = (
        find_total(totals, "kills"),
        find_total(totals, "deaths"),
        find_total(totals, "assists"),
    ) else {
        debug!("Totals missing kills/deaths/assists, career ratio unavailable");
        return 0.0;
    };

    if kills.n == 0 || deaths.sum <= 0.0 {
        debug!(
            "Cannot rebuild career ratio: games={} deaths={}",
            kills.n, deaths.sum
        );
        return 0.0;
    }

    (kills.sum + assists.sum) / deaths.sum
}

/// Career gold per minute from the `gold_per_min` total.
pub fn career_average_gpm(totals: &[PlayerTotal]) -> f64 {
    match find_total(totals, "gold_per_min") {
        Some(gpm) => gpm.average(),
        None => {
            debug!("Totals have no gold_per_min field");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(match_id: i64, hero_id: i32, kills: u32, deaths: u32, assists: u32) -> MatchSample {
        MatchSample {
            match_id,
            hero_id,
            kills,
            deaths,
            assists,
            ..Default::default()
        }
    }

    #[test]
    fn test_ratio_zero_deaths() {
        assert_eq!(ratio(0, 0, 0), 0.0);
        assert_eq!(ratio(7, 0, 5), 12.0);
        assert_eq!(ratio(1, 0, 0), 1.0);
    }

    #[test]
    fn test_ratio_with_deaths() {
        assert_eq!(ratio(10, 4, 10), 5.0);
        assert!((ratio(10, 3, 15) - 25.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_ratio_uses_summed_counters() {
        let samples = vec![sample(1, 1, 10, 1, 0), sample(2, 2, 0, 9, 0)];

        // Mean of per-game ratios would be (10 + 0) / 2 = 5.0
        let mean_of_ratios: f64 =
            samples.iter().map(MatchSample::ratio).sum::<f64>() / samples.len() as f64;
        assert_eq!(mean_of_ratios, 5.0);

        // Summed: 10 / 10 = 1.0
        assert_eq!(average_ratio(&samples), 1.0);
    }

    #[test]
    fn test_average_ratio_empty() {
        assert_eq!(average_ratio(&[]), 0.0);
    }

    #[test]
    fn test_average_ratio_large_counters() {
        let kills = u32::MAX / 2 + 1;
        let games = [sample(1, 2, kills, 1, 0), sample(2, 2, kills, 1, 0)];

        let expected = 2.0 * f64::from(kills) / 2.0;
        assert!((average_ratio(&games) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_best_ratio() {
        let samples = vec![
            sample(1, 10, 2, 2, 2),
            sample(2, 20, 8, 1, 4),
            sample(3, 30, 3, 3, 3),
        ];
        assert_eq!(best_ratio(&samples), (12.0, 20));
    }

    #[test]
    fn test_best_ratio_tie_keeps_first() {
        let samples = vec![sample(1, 10, 4, 2, 4), sample(2, 20, 2, 1, 2)];
        assert_eq!(best_ratio(&samples), (4.0, 10));
    }

    #[test]
    fn test_best_ratio_empty() {
        assert_eq!(best_ratio(&[]), (0.0, SENTINEL_HERO_ID));
    }

    #[test]
    fn test_career_best_prefers_historical() {
        let historical = vec![sample(1, 5, 3, 1, 3)];
        let recent = vec![sample(2, 6, 20, 1, 20)];

        assert_eq!(career_best_ratio(&historical, &recent), 6.0);
    }

    #[test]
    fn test_career_best_fallbacks() {
        let recent = vec![sample(2, 6, 4, 2, 4)];

        assert_eq!(career_best_ratio(&[], &recent), 4.0);
        assert_eq!(career_best_ratio(&[], &[]), 0.0);
    }

    #[test]
    fn test_career_average_ratio_kda_field() {
        let totals = vec![
            PlayerTotal::new("kills", 10, 100.0),
            PlayerTotal::new("kda", 10, 25.0),
        ];
        assert_eq!(career_average_ratio(&totals), 2.5);
    }

    #[test]
    fn test_career_average_ratio_manual() {
        let totals = vec![
            PlayerTotal::new("kills", 20, 120.0),
            PlayerTotal::new("deaths", 20, 80.0),
            PlayerTotal::new("assists", 20, 200.0),
        ];
        assert_eq!(career_average_ratio(&totals), 4.0);
    }

    #[test]
    fn test_career_average_ratio_guards() {
        let zero_deaths = vec![
            PlayerTotal::new("kills", 20, 120.0),
            PlayerTotal::new("deaths", 20, 0.0),
            PlayerTotal::new("assists", 20, 200.0),
        ];
        assert_eq!(career_average_ratio(&zero_deaths), 0.0);

        let zero_games = vec![
            PlayerTotal::new("kills", 0, 0.0),
            PlayerTotal::new("deaths", 0, 5.0),
            PlayerTotal::new("assists", 0, 0.0),
        ];
        assert_eq!(career_average_ratio(&zero_games), 0.0);

        let missing_assists = vec![
            PlayerTotal::new("kills", 20, 120.0),
            PlayerTotal::new("deaths", 20, 80.0),
        ];
        assert_eq!(career_average_ratio(&missing_assists), 0.0);
        assert_eq!(career_average_ratio(&[]), 0.0);
    }

    #[test]
    fn test_career_average_gpm() {
        let totals = vec![PlayerTotal::new("gold_per_min", 4, 2000.0)];
        assert_eq!(career_average_gpm(&totals), 500.0);
        assert_eq!(career_average_gpm(&[]), 0.0);
    }
}
