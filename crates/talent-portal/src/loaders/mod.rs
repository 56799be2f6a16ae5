//! Per-page data loaders.
//!
//! A loader never fails: any transport, status, or decode error is logged and the
//! affected resource is replaced by an empty list so the page can still render.

mod source;


use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::domain::{Application, HiringRequirement, Job, Talent};

pub use source::CatalogSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalentsPage {
    pub talents: Vec<Talent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsPage {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsPage {
    pub requirements: Vec<HiringRequirement>,
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationsPage {
    pub job_id: String,
    pub applications: Vec<Application>,
}

pub async fn load_talents<S>(source: &S) -> TalentsPage
where
    S: CatalogSource + ?Sized,
{
    let talents = source.talents().await.unwrap_or_else(|err| {
        error!(error = %err, "error fetching talents");
        Vec::new()
    });

    TalentsPage { talents }
}

pub async fn load_jobs<S>(source: &S) -> JobsPage
where
    S: CatalogSource + ?Sized,
{
    let jobs = source.jobs().await.unwrap_or_else(|err| {
        error!(error = %err, "error fetching jobs");
        Vec::new()
    });

    JobsPage { jobs }
}

/// Fetch requirements and jobs concurrently; each falls back to empty on its own.
pub async fn load_requirements<S>(source: &S) -> RequirementsPage
where
    S: CatalogSource + ?Sized,
{
    let (requirements, jobs) = tokio::join!(source.hiring_requirements(), source.jobs());

    let requirements = requirements.unwrap_or_else(|err| {
        error!(error = %err, "error fetching hiring requirements");
        Vec::new()
    });
    let jobs = jobs.unwrap_or_else(|err| {
        error!(error = %err, "error fetching jobs");
        Vec::new()
    });

    RequirementsPage { requirements, jobs }
}

/// Applications for one job with each applicant's talent attached when it can be found.
pub async fn load_job_applications<S>(source: &S, job_id: &str) -> ApplicationsPage
where
    S: CatalogSource + ?Sized,
{
    let (applications, talents) =
        tokio::join!(source.applications_for_job(job_id), source.talents());

    let mut applications = applications.unwrap_or_else(|err| {
        error!(error = %err, job_id, "error fetching applications");
        Vec::new()
    });

    match talents {
        Ok(talents) => {
            let by_id: HashMap<&str, &Talent> = talents
                .iter()
                .map(|talent| (talent.id.as_str(), talent))
                .collect();
            for application in &mut applications {
                application.talent = by_id.get(application.talent_id.as_str()).copied().cloned();
            }
        }
        Err(err) => {
            warn!(error = %err, job_id, "applications rendered without talent details");
        }
    }

    ApplicationsPage {
        job_id: job_id.to_string(),
        applications,
    }
}
