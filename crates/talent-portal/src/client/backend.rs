use reqwest::Url;
use tracing::info;

use super::error::ClientError;
use super::transport::Transport;
use crate::config::ServiceEndpoints;
use crate::domain::{
    Application, HiringRequirement, Job, NewReorderEvent, PairwisePreference, ReorderResponse,
    Talent,
};

/// Read access to the backend catalog plus reorder submission.
#[derive(Debug, Clone)]
pub struct ApiClient {
    backend: Transport,
}

impl ApiClient {
    pub fn new(endpoints: &ServiceEndpoints) -> Self {
        Self::with_http(reqwest::Client::new(), endpoints)
    }

    pub fn with_http(http: reqwest::Client, endpoints: &ServiceEndpoints) -> Self {
        Self {
            backend: Transport::new(http, endpoints.backend.clone()),
        }
    }

    pub fn backend_url(&self) -> &Url {
        self.backend.base()
    }

    pub async fn list_talents(&self) -> Result<Vec<Talent>, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "talents"])?;
        self.backend
            .execute("Failed to fetch talents", self.backend.get(url))
            .await
    }

    pub async fn get_talent(&self, talent_id: &str) -> Result<Talent, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "talents", talent_id])?;
        self.backend
            .execute("Failed to fetch talent", self.backend.get(url))
            .await
    }

    pub async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "jobs"])?;
        self.backend
            .execute("Failed to fetch jobs", self.backend.get(url))
            .await
    }

    pub async fn get_job(&self, job_id: &str) -> Result<Job, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "jobs", job_id])?;
        self.backend
            .execute("Failed to fetch job", self.backend.get(url))
            .await
    }

    pub async fn list_hiring_requirements(&self) -> Result<Vec<HiringRequirement>, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "hiring-requirements"])?;
        self.backend
            .execute("Failed to fetch hiring requirements", self.backend.get(url))
            .await
    }

    pub async fn list_applications_for_job(
        &self,
        job_id: &str,
    ) -> Result<Vec<Application>, ClientError> {
        let url = self
            .backend
            .endpoint(&["api", "v1", "applications", "job", job_id])?;
        self.backend
            .execute("Failed to fetch applications", self.backend.get(url))
            .await
    }

    /// Record a manual reorder; the backend derives pairwise preferences from it.
    pub async fn submit_reorder(
        &self,
        event: &NewReorderEvent,
    ) -> Result<ReorderResponse, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "reorder"])?;
        let response: ReorderResponse = self
            .backend
            .execute(
                "Failed to submit reorder",
                self.backend.post(url).json(event),
            )
            .await?;

        info!(
            job_id = %event.job_id,
            event_id = %response.event_id,
            preferences = response.preferences_created,
            "reorder recorded"
        );
        Ok(response)
    }

    pub async fn get_preferences_for_job(
        &self,
        job_id: &str,
    ) -> Result<Vec<PairwisePreference>, ClientError> {
        let url = self
            .backend
            .endpoint(&["api", "v1", "jobs", job_id, "preferences"])?;
        self.backend
            .execute("Failed to fetch preferences", self.backend.get(url))
            .await
    }
}
