use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::talent::Talent;

/// Per-factor match scores reported by the ranking service, each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchFactors {
    pub skills_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub title_match: f64,
    pub overall_fit: f64,
}

/// One entry of a ranking response. `rank_position` is 1-based within that response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Talent,
    pub rank_score: f64,
    pub rank_position: u32,
    pub confidence: f64,
    pub match_factors: MatchFactors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_score: Option<f64>,
}

/// Result of relaying a feedback batch to the ranking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightUpdate {
    pub status: String,
    pub message: String,
    pub current_weights: BTreeMap<String, f64>,
    pub model_version: String,
}

/// Self-reported ranking model statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingStats {
    pub total_candidates: u64,
    pub avg_confidence: f64,
    pub model_version: String,
    pub current_weights: BTreeMap<String, f64>,
}
