//! Suitability Assessment Types
//!
//! Output structures for the crop scorer: per-factor points, the total score
//! for one crop, and the score-free recommendation handed to callers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Suitability tier derived from a crop's total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suitability {
    High,
    Medium,
    Low,
}

impl Suitability {
    /// >= 8 High, >= 6 Medium, otherwise Low
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            Suitability::High
        } else if score >= 6 {
            Suitability::Medium
        } else {
            Suitability::Low
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            Suitability::High => "High",
            Suitability::Medium => "Medium",
            Suitability::Low => "Low",
        }
    }
}

/// Which input a term scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Ph,
    Moisture,
    Nitrogen,
    Weather,
}

/// Points awarded for one factor, with the reason shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermScore {
    pub factor: ScoreFactor,
    pub points: u8,
    pub reason: &'static str,
}

/// Full scoring breakdown for one crop
#[derive(Debug, Clone, PartialEq)]
pub struct CropScore {
    /// Position in the crop table (tie-break order)
    pub table_index: usize,
    pub name: String,
    pub icon: String,
    pub expected_yield: String,
    pub growth_period: String,
    /// Terms in scoring order: pH, moisture, nitrogen, weather (if present)
    pub terms: SmallVec<[TermScore; 4]>,
}

impl CropScore {
    pub fn score(&self) -> u8 {
        self.terms.iter().map(|t| t.points).sum()
    }

    pub fn suitability(&self) -> Suitability {
        Suitability::from_score(self.score())
    }

    /// Reasons joined with ", " in scoring order
    pub fn reason(&self) -> String {
        self.terms
            .iter()
            .map(|t| t.reason)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn term(&self, factor: ScoreFactor) -> Option<&TermScore> {
        self.terms.iter().find(|t| t.factor == factor)
    }

    /// Drop the numeric score
    pub fn into_recommendation(self) -> CropRecommendation {
        CropRecommendation {
            suitability: self.suitability(),
            reason: self.reason(),
            name: self.name,
            expected_yield: self.expected_yield,
            growth_period: self.growth_period,
            icon: self.icon,
        }
    }
}

/// A ranked crop as presented to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub name: String,
    pub suitability: Suitability,
    pub reason: String,
    pub expected_yield: String,
    pub growth_period: String,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Suitability::from_score(11), Suitability::High);
        assert_eq!(Suitability::from_score(8), Suitability::High);
        assert_eq!(Suitability::from_score(7), Suitability::Medium);
        assert_eq!(Suitability::from_score(6), Suitability::Medium);
        assert_eq!(Suitability::from_score(5), Suitability::Low);
        assert_eq!(Suitability::from_score(3), Suitability::Low);
    }

    #[test]
    fn test_reason_and_recommendation() {
        let score = CropScore {
            table_index: 0,
            name: "Rice".to_string(),
            icon: "🌾".to_string(),
            expected_yield: "4-6 tons/hectare".to_string(),
            growth_period: "120-150 days".to_string(),
            terms: smallvec![
                TermScore { factor: ScoreFactor::Ph, points: 3, reason: "Optimal pH level" },
                TermScore { factor: ScoreFactor::Moisture, points: 2, reason: "Adequate moisture" },
                TermScore { factor: ScoreFactor::Nitrogen, points: 1, reason: "Consider fertilizer application" },
            ],
        };
        assert_eq!(score.score(), 6);
        assert_eq!(score.term(ScoreFactor::Moisture).map(|t| t.points), Some(2));
        assert!(score.term(ScoreFactor::Weather).is_none());

        let rec = score.into_recommendation();
        assert_eq!(rec.suitability, Suitability::Medium);
        assert_eq!(
            rec.reason,
            "Optimal pH level, Adequate moisture, Consider fertilizer application"
        );
    }

    #[test]
    fn test_suitability_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Suitability::High).unwrap(), "\"High\"");
    }
}
