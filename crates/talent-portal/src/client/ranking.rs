use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ClientError;
use super::transport::Transport;
use crate::config::ServiceEndpoints;
use crate::domain::{
    Feedback, FeedbackStats, Job, NewFeedback, RankedCandidate, RankingStats, Talent,
    WeightUpdate,
};

/// Input to [`RankingClient::rank_candidates_for_job`].
///
/// Feedback influences the ranking unless [`RankRequest::without_feedback`] is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RankRequest {
    pub job_id: String,
    pub job: Job,
    pub candidates: Vec<Talent>,
    pub use_feedback: bool,
    pub feedback_data: Option<Vec<Feedback>>,
}

impl RankRequest {
    pub fn new(job_id: impl Into<String>, candidates: Vec<Talent>, job: Job) -> Self {
        Self {
            job_id: job_id.into(),
            job,
            candidates,
            use_feedback: true,
            feedback_data: None,
        }
    }

    pub fn without_feedback(mut self) -> Self {
        self.use_feedback = false;
        self
    }

    pub fn with_feedback_data(mut self, feedback: Vec<Feedback>) -> Self {
        self.feedback_data = Some(feedback);
        self
    }
}

#[derive(Serialize)]
struct RankBody<'a> {
    job: &'a Job,
    candidates: &'a [Talent],
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback_data: Option<&'a [Feedback]>,
    use_feedback: bool,
}

#[derive(Serialize)]
struct UpdateWeightsBody<'a> {
    feedback_batch: &'a [Feedback],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

/// Ranking and RLHF feedback loop.
///
/// Ranking and weight updates go to the ranking service; feedback is stored by the
/// backend API. Every method is a single request with no retry or caching.
#[derive(Debug, Clone)]
pub struct RankingClient {
    ranking: Transport,
    backend: Transport,
}

impl RankingClient {
    pub fn new(endpoints: &ServiceEndpoints) -> Self {
        Self::with_http(reqwest::Client::new(), endpoints)
    }

    pub fn with_http(http: reqwest::Client, endpoints: &ServiceEndpoints) -> Self {
        Self {
            ranking: Transport::new(http.clone(), endpoints.ranking.clone()),
            backend: Transport::new(http, endpoints.backend.clone()),
        }
    }

    pub fn ranking_url(&self) -> &Url {
        self.ranking.base()
    }

    pub async fn rank_candidates_for_job(
        &self,
        request: RankRequest,
    ) -> Result<Vec<RankedCandidate>, ClientError> {
        const CONTEXT: &str = "Failed to rank candidates";

        let url = self.ranking.endpoint(&["api", "v1", "ranking", "rank"])?;
        let body = RankBody {
            job: &request.job,
            candidates: &request.candidates,
            feedback_data: request.feedback_data.as_deref(),
            use_feedback: request.use_feedback,
        };

        let ranked: Vec<RankedCandidate> = self
            .ranking
            .execute(CONTEXT, self.ranking.post(url).json(&body))
            .await?;

        info!(
            job_id = %request.job_id,
            candidates = request.candidates.len(),
            ranked = ranked.len(),
            use_feedback = request.use_feedback,
            "ranked candidates"
        );
        Ok(ranked)
    }

    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<Feedback, ClientError> {
        let url = self.backend.endpoint(&["api", "v1", "feedback"])?;
        let stored: Feedback = self
            .backend
            .execute(
                "Failed to submit feedback",
                self.backend.post(url).json(feedback),
            )
            .await?;

        info!(
            feedback_id = %stored.id,
            talent_id = %stored.talent_id,
            job_id = %stored.job_id,
            feedback_type = %stored.feedback_type,
            "feedback recorded"
        );
        Ok(stored)
    }

    pub async fn get_feedback_stats(
        &self,
        talent_id: &str,
        job_id: Option<&str>,
    ) -> Result<FeedbackStats, ClientError> {
        let url = self
            .backend
            .endpoint(&["api", "v1", "feedback", "talent", talent_id, "stats"])?;
        let mut request = self.backend.get(url);
        if let Some(job_id) = job_id.filter(|id| !id.is_empty()) {
            request = request.query(&[("job_id", job_id)]);
        }

        self.backend
            .execute("Failed to get feedback stats", request)
            .await
    }

    /// All feedback recorded for a job, as training input for the ranking service.
    pub async fn get_feedback_for_job(&self, job_id: &str) -> Result<Vec<Feedback>, ClientError> {
        let url = self
            .backend
            .endpoint(&["api", "v1", "feedback", "job", job_id])?;
        self.backend
            .execute("Failed to get feedback for job", self.backend.get(url))
            .await
    }

    /// Relay a feedback batch; the ranking service computes and reports the new weights.
    pub async fn update_ranking_weights(
        &self,
        feedback_batch: &[Feedback],
    ) -> Result<WeightUpdate, ClientError> {
        let url = self
            .ranking
            .endpoint(&["api", "v1", "ranking", "update-weights"])?;
        let update: WeightUpdate = self
            .ranking
            .execute(
                "Failed to update ranking weights",
                self.ranking
                    .post(url)
                    .json(&UpdateWeightsBody { feedback_batch }),
            )
            .await?;

        info!(
            batch = feedback_batch.len(),
            model_version = %update.model_version,
            "ranking weights updated"
        );
        Ok(update)
    }

    pub async fn get_ranking_stats(&self) -> Result<RankingStats, ClientError> {
        let url = self.ranking.endpoint(&["api", "v1", "ranking", "stats"])?;
        self.ranking
            .execute("Failed to get ranking stats", self.ranking.get(url))
            .await
    }

    pub async fn health(&self) -> Result<ServiceHealth, ClientError> {
        let url = self.ranking.endpoint(&["api", "v1", "ranking", "health"])?;
        self.ranking
            .execute("Ranking service health check failed", self.ranking.get(url))
            .await
    }
}
