//! Record shapes shared by the backend API and the ranking service.
//!
//! Every record is created and owned by one of the upstream services; this crate only
//! reads them back or relays new submissions. Optional fields are omitted from outbound
//! bodies when absent instead of being sent as `null`.

pub mod application;
pub mod feedback;
pub mod job;
pub mod ranking;
pub mod talent;

pub use application::{Application, ApplicationStatus};
pub use feedback::{
    Feedback, FeedbackStats, FeedbackType, NewFeedback, NewReorderEvent, PairwisePreference,
    ReorderResponse, UnknownFeedbackType,
};
pub use job::{HiringRequirement, Job, JobStatus};
pub use ranking::{MatchFactors, RankedCandidate, RankingStats, WeightUpdate};
pub use talent::{
    CandidateScoreDetails, ExperienceSummary, PlatformProfile, Recommendation, ScoringBreakdown,
    SkillList, SocialMediaAnalysis, Talent, VerifiedFlag,
};

/// Split a comma-joined list, trimming entries and dropping empty ones.
pub(crate) fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
