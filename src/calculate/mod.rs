//! Scoring engine.
//!
//! Pure, stateless calculations over match telemetry:
//! - Kill/death/assist ratios, single game and career
//! - Win rate, hero highlights, consistency and composite scores
//! - Recent-versus-older performance trends
//! - Five-dimension single-match analysis with recommendations
//!
//! Identical inputs always produce identical outputs.

pub mod aggregate;
pub mod analyzer;
pub mod ratio;
pub mod trend;

pub use aggregate::{
    best_hero, career_summary, composite_score, consistency_score, most_played_hero, win_rate,
};
pub use analyzer::analyze;
pub use ratio::{
    average_ratio, best_ratio, career_average_gpm, career_average_ratio, career_best_ratio, ratio,
};
pub use trend::performance_trend;
