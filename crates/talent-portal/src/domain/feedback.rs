use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recruiter signal on a ranked candidate. Only these two values exist on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Upvote,
    Downvote,
}

impl FeedbackType {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackType::Upvote => "upvote",
            FeedbackType::Downvote => "downvote",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("feedback type must be 'upvote' or 'downvote' (got '{0}')")]
pub struct UnknownFeedbackType(pub String);

impl FromStr for FeedbackType {
    type Err = UnknownFeedbackType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "upvote" | "up" => Ok(FeedbackType::Upvote),
            "downvote" | "down" => Ok(FeedbackType::Downvote),
            _ => Err(UnknownFeedbackType(value.to_string())),
        }
    }
}

/// A persisted feedback event. Immutable once the backend has stored it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub talent_id: String,
    pub job_id: String,
    pub feedback_type: FeedbackType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
}

/// Submission body for a new feedback event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub talent_id: String,
    pub job_id: String,
    pub feedback_type: FeedbackType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewFeedback {
    pub fn new(
        talent_id: impl Into<String>,
        job_id: impl Into<String>,
        feedback_type: FeedbackType,
    ) -> Self {
        Self {
            talent_id: talent_id.into(),
            job_id: job_id.into(),
            feedback_type,
            expected_rank: None,
            recruiter_id: None,
            notes: None,
        }
    }

    pub fn with_expected_rank(mut self, rank: u32) -> Self {
        self.expected_rank = Some(rank);
        self
    }

    pub fn with_recruiter(mut self, recruiter_id: impl Into<String>) -> Self {
        self.recruiter_id = Some(recruiter_id.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Aggregate feedback counts for a talent, optionally scoped to one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub talent_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub net_score: i64,
    #[serde(alias = "total")]
    pub total_feedback: u64,
}

/// Manual drag-and-drop reorder of a job's candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReorderEvent {
    pub job_id: String,
    pub before_order: Vec<String>,
    pub after_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_talent_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderResponse {
    pub event_id: String,
    pub preferences_created: u32,
    pub message: String,
}

/// "winner ranked above loser" pair the backend derives from reorder events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwisePreference {
    pub id: String,
    pub winner_id: String,
    pub loser_id: String,
    pub job_id: String,
    pub job_text: String,
    pub winner_text: String,
    pub loser_text: String,
    pub source: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reorder_event_id: Option<String>,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_feedback_omits_absent_optionals() {
        let body = serde_json::to_value(NewFeedback::new("t-1", "j-1", FeedbackType::Downvote))
            .expect("feedback encodes");

        assert_eq!(
            body,
            json!({ "talent_id": "t-1", "job_id": "j-1", "feedback_type": "downvote" })
        );
    }

    #[test]
    fn new_feedback_forwards_provided_optionals() {
        let body = serde_json::to_value(
            NewFeedback::new("t-1", "j-1", FeedbackType::Upvote)
                .with_expected_rank(2)
                .with_notes("strong systems background"),
        )
        .expect("feedback encodes");

        assert_eq!(body["expected_rank"], json!(2));
        assert_eq!(body["notes"], json!("strong systems background"));
        assert!(body.get("recruiter_id").is_none());
    }

    #[test]
    fn feedback_type_accepts_only_two_values() {
        assert_eq!("upvote".parse::<FeedbackType>(), Ok(FeedbackType::Upvote));
        assert_eq!(" Down ".parse::<FeedbackType>(), Ok(FeedbackType::Downvote));
        assert!("sidevote".parse::<FeedbackType>().is_err());
        assert!(serde_json::from_value::<FeedbackType>(json!("neutral")).is_err());
    }

    #[test]
    fn feedback_stats_accepts_short_total_name() {
        let stats: FeedbackStats = serde_json::from_value(json!({
            "talent_id": "t-1",
            "upvotes": 3,
            "downvotes": 1,
            "net_score": 2,
            "total": 4
        }))
        .expect("stats decode");

        assert_eq!(stats.total_feedback, 4);
        assert_eq!(stats.job_id, None);
    }
}
