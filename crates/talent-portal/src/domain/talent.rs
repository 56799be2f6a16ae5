use serde::{Deserialize, Serialize};

use super::split_comma_list;

/// Candidate profile as stored by the backend, including optional enrichment
/// produced by resume screening, social research, and scoring.
///
/// Enrichment fields are independent: any subset may be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub experience: String,
    /// Kept in the form received, see [`Talent::skills`].
    pub skills: SkillList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub verified: VerifiedFlag,
    pub created_at: String,
    /// JSON array of [`ExperienceSummary`], see [`Talent::resume_experiences`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_experiences: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_document_id: Option<String>,
    /// JSON object of [`SocialMediaAnalysis`], see [`Talent::social_analysis`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_handle_discovered: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_score: Option<f64>,
    /// JSON object of [`CandidateScoreDetails`], see [`Talent::score_details`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_score_details: Option<String>,
}

impl Talent {
    pub fn skills(&self) -> Vec<String> {
        self.skills.items()
    }

    pub fn is_verified(&self) -> bool {
        self.verified.is_set()
    }

    /// Decode the resume-derived experience list. `None` when never screened.
    pub fn resume_experiences(&self) -> Option<Result<Vec<ExperienceSummary>, serde_json::Error>> {
        self.resume_experiences.as_deref().map(serde_json::from_str)
    }

    pub fn social_analysis(&self) -> Option<Result<SocialMediaAnalysis, serde_json::Error>> {
        self.social_analysis.as_deref().map(serde_json::from_str)
    }

    pub fn score_details(&self) -> Option<Result<CandidateScoreDetails, serde_json::Error>> {
        self.candidate_score_details
            .as_deref()
            .map(serde_json::from_str)
    }

    /// Profile links that have been discovered so far, labelled by platform.
    pub fn profile_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("linkedin", self.linkedin_url.as_deref()),
            ("x", self.x_url.as_deref()),
            ("github", self.github_url.as_deref()),
            ("gitlab", self.gitlab_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.map(|url| (platform, url)))
        .collect()
    }
}

/// One role extracted from a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    pub company: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_signals: Vec<String>,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub recruiter_notes: Vec<String>,
}

/// Per-platform research summary attached to a talent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaAnalysis {
    pub talent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tldr: Option<String>,
    #[serde(default)]
    pub profiles: Vec<PlatformProfile>,
    #[serde(default)]
    pub combined_skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub skills_match: f64,
    pub experience_fit: f64,
    pub culture_fit: f64,
    pub overall_impression: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongYes,
    Yes,
    Maybe,
    No,
}

/// Computed candidate score for one job, with its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScoreDetails {
    pub talent_id: String,
    pub job_id: String,
    pub overall_score: f64,
    pub breakdown: ScoringBreakdown,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    pub recommendation: Recommendation,
    pub summary: String,
    pub timestamp: String,
}

/// Skills exactly as an upstream sent them. The backend stores one comma-joined
/// column; other producers send a list. Re-encoding emits the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    Joined(String),
    List(Vec<String>),
}

impl SkillList {
    /// Trimmed, non-empty entries.
    pub fn items(&self) -> Vec<String> {
        match self {
            SkillList::Joined(raw) => split_comma_list(raw),
            SkillList::List(list) => list
                .iter()
                .map(|skill| skill.trim())
                .filter(|skill| !skill.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// The backend stores `verified` as an integer column; typed clients send a bool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerifiedFlag {
    Flag(bool),
    Int(i64),
}

impl VerifiedFlag {
    pub fn is_set(self) -> bool {
        match self {
            VerifiedFlag::Flag(flag) => flag,
            VerifiedFlag::Int(value) => value != 0,
        }
    }
}
