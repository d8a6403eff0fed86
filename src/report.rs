//! Text and JSON rendering of analysis results.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    CareerSummary, MatchRecord, PerformanceAnalysis, PlayerRecord, ScoreBand, ScoreColor, ScoreGrade,
};

/// Number of recommendations listed in a summary.
const SUMMARY_RECOMMENDATIONS: usize = 3;

/// Envelope written when an analysis is exported as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub hero_name: String,
    pub grade: ScoreGrade,
    pub color: ScoreColor,
    pub analysis: PerformanceAnalysis,
}

impl AnalysisReport {
    pub fn new(hero_name: String, analysis: PerformanceAnalysis) -> Self {
        Self {
            generated_at: Utc::now(),
            hero_name,
            grade: ScoreGrade::from_score(analysis.overall_score),
            color: ScoreColor::from_score(analysis.overall_score),
            analysis,
        }
    }
}

/// Grade, strengths, weaknesses and the top recommendations.
pub fn performance_summary(analysis: &PerformanceAnalysis) -> String {
    let grade = ScoreGrade::from_score(analysis.overall_score);
    let band = ScoreBand::from_score(analysis.overall_score);

    let mut summary = format!("Performance Grade: {} ({})\n\n", grade, band);

    if !analysis.strengths.is_empty() {
        summary.push_str("Strengths:\n");
        for strength in &analysis.strengths {
            let _ = writeln!(summary, "  + {}", strength);
        }
        summary.push('\n');
    }

    if !analysis.weaknesses.is_empty() {
        summary.push_str("Areas for Improvement:\n");
        for weakness in &analysis.weaknesses {
            let _ = writeln!(summary, "  - {}", weakness);
        }
        summary.push('\n');
    }

    if !analysis.recommendations.is_empty() {
        summary.push_str("Top Recommendations:\n");
        for (index, recommendation) in analysis
            .recommendations
            .iter()
            .take(SUMMARY_RECOMMENDATIONS)
            .enumerate()
        {
            let _ = writeln!(summary, "{}. {}", index + 1, recommendation.actionable);
        }
    }

    summary
}

/// Full text report: headline, metric breakdown, summary and recommendation
/// details.
pub fn analysis_text(
    record: &MatchRecord,
    player: &PlayerRecord,
    hero_name: &str,
    analysis: &PerformanceAnalysis,
) -> String {
    let m = &analysis.key_metrics;
    let b = &analysis.benchmark_comparison;
    let mut text = String::new();

    let _ = writeln!(
        text,
        "Match {} | {} ({}) | {}",
        record.match_id,
        hero_name,
        player.side(),
        if player.is_win(record.radiant_win) {
            "Victory"
        } else {
            "Defeat"
        }
    );
    let _ = writeln!(text, "Overall score: {:.1}/100\n", analysis.overall_score);

    let _ = writeln!(text, "Farming efficiency:  {:>5.1}", m.farming_efficiency);
    let _ = writeln!(text, "Combat performance:  {:>5.1}", m.combat_performance);
    let _ = writeln!(text, "Economy:             {:>5.1}", m.economy_score);
    let _ = writeln!(text, "Itemization:         {:>5.1}", m.itemization_score);
    let _ = writeln!(text, "Map awareness:       {:>5.1}\n", m.map_awareness);

    let _ = writeln!(
        text,
        "Versus rank benchmark: farming {:.0}%, economy {:.0}%, fights {:.0}%\n",
        b.farming_efficiency, b.economy_efficiency, b.fight_participation
    );

    text.push_str(&performance_summary(analysis));

    for recommendation in &analysis.recommendations {
        let _ = write!(
            text,
            "\n[{}] {} ({} priority)\n  {}\n",
            recommendation.category,
            recommendation.title,
            recommendation.priority,
            recommendation.description
        );
        if let Some(target) = &recommendation.target_value {
            let _ = writeln!(text, "  Target: {}", target);
        }
    }

    text
}

/// Short shareable match recap.
pub fn share_text(
    record: &MatchRecord,
    player: &PlayerRecord,
    hero_name: &str,
    analysis: &PerformanceAnalysis,
) -> String {
    let result = if player.is_win(record.radiant_win) {
        "Victory"
    } else {
        "Defeat"
    };

    format!(
        "My Dota 2 Match Analysis:\n\
         Hero: {hero}\n\
         Result: {result} ({minutes} minutes)\n\
         Performance Score: {score}/100 ({grade})\n\
         KDA: {k}/{d}/{a} (Ratio: {ratio:.2})\n\
         GPM: {gpm}\n\
         XPM: {xpm}\n\
         Last Hits: {lh}\n",
        hero = hero_name,
        result = result,
        minutes = record.duration / 60,
        score = analysis.overall_score.floor(),
        grade = ScoreGrade::from_score(analysis.overall_score),
        k = player.kills,
        d = player.deaths,
        a = player.assists,
        ratio = player.ratio(),
        gpm = player.gold_per_min,
        xpm = player.xp_per_min,
        lh = player.last_hits,
    )
}

/// Text rendering of a career summary.
pub fn career_text(account_id: i64, summary: &CareerSummary) -> String {
    let mut text = String::new();

    let _ = writeln!(
        text,
        "Account {} | last {} games",
        account_id, summary.sample_size
    );
    let _ = writeln!(text, "Win rate:             {:.1}%", summary.win_rate * 100.0);
    let _ = writeln!(text, "Average KDA:          {:.2}", summary.average_ratio);
    let _ = writeln!(text, "Best KDA:             {:.2}", summary.best_ratio);
    let _ = writeln!(text, "Career KDA:           {:.2}", summary.career_average_ratio);
    let _ = writeln!(text, "Career GPM:           {:.0}", summary.career_average_gpm);
    let _ = writeln!(
        text,
        "Most played:          {} ({} games)",
        summary.most_played_hero.name, summary.most_played_hero.games
    );
    let _ = writeln!(
        text,
        "Best hero:            {} ({:.1}% win rate)",
        summary.best_hero.name,
        summary.best_hero.win_rate * 100.0
    );
    let _ = writeln!(text, "Consistency:          {:.1}", summary.consistency);
    let _ = writeln!(
        text,
        "Composite score:      {:.1} ({})",
        summary.composite_score,
        ScoreBand::from_score(summary.composite_score)
    );

    if let Some(trend) = &summary.trend {
        let _ = writeln!(
            text,
            "Trend:                {} (KDA {:+.2}, win rate {:+.1} pts)",
            trend.direction, trend.ratio_delta, trend.win_rate_delta
        );
    }

    text
}
