//! Recent-versus-older comparison over a match window.

use crate::models::{MatchSample, PerformanceTrend, TrendDirection};

use super::aggregate::win_rate;

/// Ratio change needed before a trend counts as improving or declining.
pub const TREND_RATIO_THRESHOLD: f64 = 0.25;

fn mean_ratio(samples: &[MatchSample]) -> f64 {
    samples.iter().map(MatchSample::ratio).sum::<f64>() / samples.len() as f64
}

/// Compare the newer half of `samples` (ordered newest first) with the older
/// half. Returns `None` when either half would be empty.
pub fn performance_trend(samples: &[MatchSample]) -> Option<PerformanceTrend> {
    let mid = samples.len() / 2;
    if mid == 0 {
        return None;
    }

    let (recent, older) = samples.split_at(mid);

    let ratio_delta = mean_ratio(recent) - mean_ratio(older);
    let win_rate_delta = (win_rate(recent) - win_rate(older)) * 100.0;

    let direction = if ratio_delta > TREND_RATIO_THRESHOLD {
        TrendDirection::Improving
    } else if ratio_delta < -TREND_RATIO_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Some(PerformanceTrend {
        ratio_delta,
        win_rate_delta,
        direction,
    })
}
