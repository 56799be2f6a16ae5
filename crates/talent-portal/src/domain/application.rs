use serde::{Deserialize, Serialize};

use super::talent::Talent;

/// Review state of an application; unrecognised values pass through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Accepted,
    Rejected,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "pending" => ApplicationStatus::Pending,
            "reviewed" => ApplicationStatus::Reviewed,
            "accepted" => ApplicationStatus::Accepted,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Other(raw),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A talent's application to a job. The backend never ships resume bytes in listings,
/// only whether one was attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub talent_id: String,
    pub job_id: String,
    pub has_resume: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: String,
    /// Filled in client-side after looking the talent up by id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talent: Option<Talent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn application_decodes_without_resolved_talent() {
        let application: Application = serde_json::from_value(json!({
            "id": "a-1",
            "talent_id": "t-1",
            "job_id": "j-1",
            "has_resume": true,
            "resume_filename": "ada.pdf",
            "cover_letter": null,
            "status": "reviewed",
            "created_at": "2025-02-01T00:00:00Z"
        }))
        .expect("application decodes");

        assert_eq!(application.status, ApplicationStatus::Reviewed);
        assert!(application.talent.is_none());

        let value = serde_json::to_value(&application).expect("application encodes");
        assert!(value.get("talent").is_none());
        assert!(value.get("cover_letter").is_none());
    }

    #[test]
    fn application_status_passes_unknown_values_through() {
        let status: ApplicationStatus =
            serde_json::from_value(json!("interviewing")).expect("free-text status decodes");
        assert_eq!(status, ApplicationStatus::Other("interviewing".to_string()));
        assert_eq!(String::from(status), "interviewing");
        assert_eq!(String::from(ApplicationStatus::Accepted), "accepted");
    }
}
