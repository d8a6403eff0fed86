//! Letter grades and descriptive bands for 0-100 scores.

use serde::{Deserialize, Serialize};

/// Letter grade shown on reports and share cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreGrade {
    #[serde(rename = "S+")]
    SPlus,
    S,
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
}

impl ScoreGrade {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreGrade::SPlus
        } else if score >= 85.0 {
            ScoreGrade::S
        } else if score >= 80.0 {
            ScoreGrade::APlus
        } else if score >= 75.0 {
            ScoreGrade::A
        } else if score >= 70.0 {
            ScoreGrade::BPlus
        } else if score >= 65.0 {
            ScoreGrade::B
        } else if score >= 60.0 {
            ScoreGrade::CPlus
        } else if score >= 55.0 {
            ScoreGrade::C
        } else if score >= 50.0 {
            ScoreGrade::DPlus
        } else {
            ScoreGrade::D
        }
    }
}

impl std::fmt::Display for ScoreGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ScoreGrade::SPlus => "S+",
            ScoreGrade::S => "S",
            ScoreGrade::APlus => "A+",
            ScoreGrade::A => "A",
            ScoreGrade::BPlus => "B+",
            ScoreGrade::B => "B",
            ScoreGrade::CPlus => "C+",
            ScoreGrade::C => "C",
            ScoreGrade::DPlus => "D+",
            ScoreGrade::D => "D",
        };
        write!(f, "{}", label)
    }
}

/// Word description of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Exceptional,
    Excellent,
    Good,
    Average,
    BelowAverage,
    NeedsWork,
    RequiresImprovement,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreBand::Exceptional
        } else if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 70.0 {
            ScoreBand::Good
        } else if score >= 60.0 {
            ScoreBand::Average
        } else if score >= 50.0 {
            ScoreBand::BelowAverage
        } else if score >= 40.0 {
            ScoreBand::NeedsWork
        } else {
            ScoreBand::RequiresImprovement
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Exceptional => write!(f, "Exceptional"),
            ScoreBand::Excellent => write!(f, "Excellent"),
            ScoreBand::Good => write!(f, "Good"),
            ScoreBand::Average => write!(f, "Average"),
            ScoreBand::BelowAverage => write!(f, "Below Average"),
            ScoreBand::NeedsWork => write!(f, "Needs Work"),
            ScoreBand::RequiresImprovement => write!(f, "Requires Improvement"),
        }
    }
}

/// Traffic-light color used when rendering a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

impl ScoreColor {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreColor::Green
        } else if score >= 60.0 {
            ScoreColor::Yellow
        } else {
            ScoreColor::Red
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(ScoreGrade::from_score(100.0), ScoreGrade::SPlus);
        assert_eq!(ScoreGrade::from_score(90.0), ScoreGrade::SPlus);
        assert_eq!(ScoreGrade::from_score(89.9), ScoreGrade::S);
        assert_eq!(ScoreGrade::from_score(80.0), ScoreGrade::APlus);
        assert_eq!(ScoreGrade::from_score(72.0), ScoreGrade::BPlus);
        assert_eq!(ScoreGrade::from_score(55.0), ScoreGrade::C);
        assert_eq!(ScoreGrade::from_score(50.0), ScoreGrade::DPlus);
        assert_eq!(ScoreGrade::from_score(12.0), ScoreGrade::D);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(ScoreGrade::SPlus.to_string(), "S+");
        assert_eq!(ScoreGrade::B.to_string(), "B");
        assert_eq!(serde_json::to_string(&ScoreGrade::APlus).unwrap(), "\"A+\"");
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(95.0), ScoreBand::Exceptional);
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.99), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(45.0), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::from_score(10.0), ScoreBand::RequiresImprovement);
        assert_eq!(ScoreBand::BelowAverage.to_string(), "Below Average");
    }

    #[test]
    fn test_color() {
        assert_eq!(ScoreColor::from_score(80.0), ScoreColor::Green);
        assert_eq!(ScoreColor::from_score(60.0), ScoreColor::Yellow);
        assert_eq!(ScoreColor::from_score(59.0), ScoreColor::Red);
    }
}
