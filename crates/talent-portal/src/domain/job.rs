use serde::{Deserialize, Serialize};

use super::split_comma_list;

/// Posting state. The backend stores it as free text, so values outside the known
/// set decode as [`JobStatus::Other`] and are written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Active,
    Closed,
    Draft,
    Other(String),
}

impl JobStatus {
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Closed => "closed",
            JobStatus::Draft => "draft",
            JobStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => JobStatus::Active,
            "closed" => JobStatus::Closed,
            "draft" => JobStatus::Draft,
            _ => JobStatus::Other(raw),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Job posting as published by the backend.
///
/// `skills_required` stays comma-joined exactly as the backend sends it; use
/// [`Job::skills`] for the split form. The salary fields travel together but each
/// may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// remote, onsite, hybrid
    pub location_type: String,
    /// full-time, part-time, contract
    pub employment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_currency: Option<String>,
    pub skills_required: String,
    /// entry, mid, senior, lead
    pub experience_level: String,
    pub status: JobStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl Job {
    pub fn skills(&self) -> Vec<String> {
        split_comma_list(&self.skills_required)
    }

    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// Free-text hiring brief, optionally tied to a published job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiringRequirement {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    pub title: String,
    pub company_name: String,
    pub requirements_text: String,
    pub created_at: String,
}
