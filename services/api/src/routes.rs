use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;
use talent_portal::loaders::{
    load_job_applications, load_jobs, load_requirements, load_talents, ApplicationsPage,
    CatalogSource, JobsPage, RequirementsPage, TalentsPage,
};

/// Page data routes. Each always answers 200; upstream failures surface as empty lists.
pub(crate) fn page_routes<S>(source: Arc<S>) -> Router
where
    S: CatalogSource + 'static,
{
    Router::new()
        .route("/pages/talents", get(talents_page::<S>))
        .route("/pages/jobs", get(jobs_page::<S>))
        .route("/pages/requirements", get(requirements_page::<S>))
        .route(
            "/pages/jobs/:job_id/applications",
            get(applications_page::<S>),
        )
        .with_state(source)
}

pub(crate) fn with_page_routes<S>(source: Arc<S>) -> Router
where
    S: CatalogSource + 'static,
{
    page_routes(source)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn talents_page<S>(State(source): State<Arc<S>>) -> Json<TalentsPage>
where
    S: CatalogSource + 'static,
{
    Json(load_talents(source.as_ref()).await)
}

async fn jobs_page<S>(State(source): State<Arc<S>>) -> Json<JobsPage>
where
    S: CatalogSource + 'static,
{
    Json(load_jobs(source.as_ref()).await)
}

async fn requirements_page<S>(State(source): State<Arc<S>>) -> Json<RequirementsPage>
where
    S: CatalogSource + 'static,
{
    Json(load_requirements(source.as_ref()).await)
}

async fn applications_page<S>(
    State(source): State<Arc<S>>,
    Path(job_id): Path<String>,
) -> Json<ApplicationsPage>
where
    S: CatalogSource + 'static,
{
    Json(load_job_applications(source.as_ref(), &job_id).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Mutex;
    use talent_portal::domain::{Application, HiringRequirement, Job, Talent};
    use talent_portal::ClientError;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubCatalog {
        jobs: Vec<Job>,
        requested_job: Mutex<Option<String>>,
    }

    #[async_trait]
    impl CatalogSource for StubCatalog {
        async fn talents(&self) -> Result<Vec<Talent>, ClientError> {
            Err(ClientError::status(
                "Failed to fetch talents",
                StatusCode::BAD_GATEWAY,
            ))
        }

        async fn jobs(&self) -> Result<Vec<Job>, ClientError> {
            Ok(self.jobs.clone())
        }

        async fn hiring_requirements(&self) -> Result<Vec<HiringRequirement>, ClientError> {
            Err(ClientError::status(
                "Failed to fetch hiring requirements",
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }

        async fn applications_for_job(
            &self,
            job_id: &str,
        ) -> Result<Vec<Application>, ClientError> {
            *self.requested_job.lock().expect("stub mutex poisoned") = Some(job_id.to_string());
            Ok(Vec::new())
        }
    }

    fn job(id: &str) -> Job {
        serde_json::from_value(json!({
            "id": id,
            "title": "Platform Engineer",
            "description": "Keep the lights on",
            "company_name": "Acme",
            "location_type": "remote",
            "employment_type": "full-time",
            "skills_required": "Rust",
            "experience_level": "senior",
            "status": "active",
            "created_at": "2025-01-01T00:00:00Z"
        }))
        .expect("valid job")
    }

    fn app_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let value = serde_json::from_slice(&body).expect("json body");
        (status, value)
    }

    #[tokio::test]
    async fn talents_page_degrades_to_empty_list() {
        let router = page_routes(Arc::new(StubCatalog::default()));

        let (status, body) = get_json(router, "/pages/talents").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "talents": [] }));
    }

    #[tokio::test]
    async fn requirements_page_keeps_jobs_when_requirements_fail() {
        let source = Arc::new(StubCatalog {
            jobs: vec![job("j1")],
            ..StubCatalog::default()
        });

        let (status, body) = get_json(page_routes(source), "/pages/requirements").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["requirements"], json!([]));
        assert_eq!(body["jobs"][0]["id"], json!("j1"));
    }

    #[tokio::test]
    async fn applications_page_passes_job_id_through() {
        let source = Arc::new(StubCatalog::default());

        let (status, body) =
            get_json(page_routes(source.clone()), "/pages/jobs/j-42/applications").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "job_id": "j-42", "applications": [] }));
        assert_eq!(
            source
                .requested_job
                .lock()
                .expect("stub mutex poisoned")
                .as_deref(),
            Some("j-42")
        );
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let router = with_page_routes(Arc::new(StubCatalog::default()))
            .layer(Extension(app_state(false)));

        let (status, body) = get_json(router, "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], json!("initializing"));
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let router =
            with_page_routes(Arc::new(StubCatalog::default())).layer(Extension(app_state(true)));

        let (status, body) = get_json(router, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
