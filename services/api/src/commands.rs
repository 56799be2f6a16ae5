use clap::Args;
use serde::Serialize;
use talent_portal::config::AppConfig;
use talent_portal::domain::{FeedbackType, NewFeedback, NewReorderEvent, Talent};
use talent_portal::error::AppError;
use talent_portal::loaders::{load_job_applications, load_jobs, load_requirements, load_talents};
use talent_portal::{telemetry, ApiClient, RankRequest, RankingClient};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Job to rank candidates for
    pub(crate) job_id: String,
    /// Candidate talent IDs (repeatable or comma separated). Defaults to every talent.
    #[arg(long = "talent", value_delimiter = ',')]
    pub(crate) talents: Vec<String>,
    /// Rank on match factors alone, ignoring recruiter feedback
    #[arg(long)]
    pub(crate) no_feedback: bool,
    /// Send the job's recorded feedback along with the ranking request
    #[arg(long)]
    pub(crate) with_history: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SubmitFeedbackArgs {
    /// Talent receiving the feedback
    #[arg(long)]
    pub(crate) talent: String,
    /// Job the feedback applies to
    #[arg(long)]
    pub(crate) job: String,
    /// upvote or downvote
    #[arg(long)]
    pub(crate) kind: FeedbackType,
    /// Where the recruiter thinks the candidate should rank
    #[arg(long)]
    pub(crate) expected_rank: Option<u32>,
    /// Recruiter submitting the feedback
    #[arg(long)]
    pub(crate) recruiter: Option<String>,
    /// Free-form notes
    #[arg(long)]
    pub(crate) notes: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ReorderArgs {
    /// Job whose candidate list was reordered
    pub(crate) job_id: String,
    /// Talent IDs in their original order
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) before: Vec<String>,
    /// Talent IDs in the recruiter's order
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) after: Vec<String>,
    /// Talent that was dragged
    #[arg(long)]
    pub(crate) moved: Option<String>,
}

struct Clients {
    api: ApiClient,
    ranking: RankingClient,
}

fn bootstrap() -> Result<Clients, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    Ok(Clients {
        api: ApiClient::new(&config.endpoints),
        ranking: RankingClient::new(&config.endpoints),
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn run_talents() -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&load_talents(&clients.api).await)
}

pub(crate) async fn run_jobs() -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&load_jobs(&clients.api).await)
}

pub(crate) async fn run_requirements() -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&load_requirements(&clients.api).await)
}

pub(crate) async fn run_applications(job_id: &str) -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&load_job_applications(&clients.api, job_id).await)
}

pub(crate) async fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        job_id,
        talents,
        no_feedback,
        with_history,
    } = args;
    let clients = bootstrap()?;

    let job = clients.api.get_job(&job_id).await?;
    let candidates = select_candidates(clients.api.list_talents().await?, &talents);
    info!(job_id = %job_id, candidates = candidates.len(), "ranking candidates");

    let mut request = RankRequest::new(job_id.as_str(), candidates, job);
    if no_feedback {
        request = request.without_feedback();
    }
    if with_history {
        let history = clients.ranking.get_feedback_for_job(&job_id).await?;
        request = request.with_feedback_data(history);
    }

    print_json(&clients.ranking.rank_candidates_for_job(request).await?)
}

pub(crate) async fn run_submit_feedback(args: SubmitFeedbackArgs) -> Result<(), AppError> {
    let SubmitFeedbackArgs {
        talent,
        job,
        kind,
        expected_rank,
        recruiter,
        notes,
    } = args;
    let clients = bootstrap()?;

    let mut feedback = NewFeedback::new(talent, job, kind);
    if let Some(rank) = expected_rank {
        feedback = feedback.with_expected_rank(rank);
    }
    if let Some(recruiter) = recruiter {
        feedback = feedback.with_recruiter(recruiter);
    }
    if let Some(notes) = notes {
        feedback = feedback.with_notes(notes);
    }

    print_json(&clients.ranking.submit_feedback(&feedback).await?)
}

pub(crate) async fn run_feedback_stats(
    talent_id: &str,
    job_id: Option<&str>,
) -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&clients.ranking.get_feedback_stats(talent_id, job_id).await?)
}

pub(crate) async fn run_feedback_for_job(job_id: &str) -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&clients.ranking.get_feedback_for_job(job_id).await?)
}

pub(crate) async fn run_update_weights(job_id: &str) -> Result<(), AppError> {
    let clients = bootstrap()?;
    let batch = clients.ranking.get_feedback_for_job(job_id).await?;
    print_json(&clients.ranking.update_ranking_weights(&batch).await?)
}

pub(crate) async fn run_ranking_stats() -> Result<(), AppError> {
    let clients = bootstrap()?;
    print_json(&clients.ranking.get_ranking_stats().await?)
}

pub(crate) async fn run_ranking_health() -> Result<(), AppError> {
    let clients = bootstrap()?;
    info!(ranking = %clients.ranking.ranking_url(), "checking ranking service");
    print_json(&clients.ranking.health().await?)
}

pub(crate) async fn run_reorder(args: ReorderArgs) -> Result<(), AppError> {
    let ReorderArgs {
        job_id,
        before,
        after,
        moved,
    } = args;
    let clients = bootstrap()?;

    let event = NewReorderEvent {
        job_id,
        before_order: before,
        after_order: after,
        moved_talent_id: moved,
    };
    print_json(&clients.api.submit_reorder(&event).await?)
}

/// Keeps the requested talents in request order; an empty selection keeps everyone.
fn select_candidates(mut all: Vec<Talent>, wanted: &[String]) -> Vec<Talent> {
    if wanted.is_empty() {
        return all;
    }

    wanted
        .iter()
        .filter_map(|id| {
            let position = all.iter().position(|talent| &talent.id == id)?;
            Some(all.swap_remove(position))
        })
        .collect()
}
