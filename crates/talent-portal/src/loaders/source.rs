use async_trait::async_trait;

use crate::client::{ApiClient, ClientError};
use crate::domain::{Application, HiringRequirement, Job, Talent};

/// Catalog reads the page loaders depend on, so loaders can run against any backend.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn talents(&self) -> Result<Vec<Talent>, ClientError>;
    async fn jobs(&self) -> Result<Vec<Job>, ClientError>;
    async fn hiring_requirements(&self) -> Result<Vec<HiringRequirement>, ClientError>;
    async fn applications_for_job(&self, job_id: &str) -> Result<Vec<Application>, ClientError>;
}

#[async_trait]
impl CatalogSource for ApiClient {
    async fn talents(&self) -> Result<Vec<Talent>, ClientError> {
        self.list_talents().await
    }

    async fn jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.list_jobs().await
    }

    async fn hiring_requirements(&self) -> Result<Vec<HiringRequirement>, ClientError> {
        self.list_hiring_requirements().await
    }

    async fn applications_for_job(&self, job_id: &str) -> Result<Vec<Application>, ClientError> {
        self.list_applications_for_job(job_id).await
    }
}
