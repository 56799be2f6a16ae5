use crate::commands::{
    run_applications, run_feedback_for_job, run_feedback_stats, run_jobs, run_rank,
    run_ranking_health, run_ranking_stats, run_reorder, run_requirements, run_submit_feedback,
    run_talents, run_update_weights, RankArgs, ReorderArgs, SubmitFeedbackArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_portal::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "talent-portal",
    about = "Query the talent portal backend and GRPO ranking service, or serve page data over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the page-data gateway (default command)
    Serve(ServeArgs),
    /// Print the talent list page data
    Talents,
    /// Print the job list page data
    Jobs,
    /// Print hiring requirements together with jobs
    Requirements,
    /// Print a job's applications with applicant details attached
    Applications {
        /// Job ID
        job_id: String,
    },
    /// Rank candidates for a job with the GRPO ranking service
    Rank(RankArgs),
    /// Submit or inspect recruiter feedback
    Feedback {
        #[command(subcommand)]
        command: FeedbackCommand,
    },
    /// Manage ranking model weights
    Weights {
        #[command(subcommand)]
        command: WeightsCommand,
    },
    /// Show ranking model statistics
    Stats,
    /// Check that the ranking service is up
    Health,
    /// Record a manual reorder of a job's candidates
    Reorder(ReorderArgs),
}

#[derive(Subcommand, Debug)]
enum FeedbackCommand {
    /// Upvote or downvote a candidate for a job
    Submit(SubmitFeedbackArgs),
    /// Show aggregate feedback for a talent
    Stats {
        /// Talent ID
        talent_id: String,
        /// Restrict counts to one job
        #[arg(long)]
        job: Option<String>,
    },
    /// List all feedback recorded for a job
    Job {
        /// Job ID
        job_id: String,
    },
}

#[derive(Subcommand, Debug)]
enum WeightsCommand {
    /// Send a job's recorded feedback to the ranking service as a training batch
    Update {
        /// Job ID whose feedback forms the batch
        job_id: String,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Talents => run_talents().await,
        Command::Jobs => run_jobs().await,
        Command::Requirements => run_requirements().await,
        Command::Applications { job_id } => run_applications(&job_id).await,
        Command::Rank(args) => run_rank(args).await,
        Command::Feedback { command } => match command {
            FeedbackCommand::Submit(args) => run_submit_feedback(args).await,
            FeedbackCommand::Stats { talent_id, job } => {
                run_feedback_stats(&talent_id, job.as_deref()).await
            }
            FeedbackCommand::Job { job_id } => run_feedback_for_job(&job_id).await,
        },
        Command::Weights {
            command: WeightsCommand::Update { job_id },
        } => run_update_weights(&job_id).await,
        Command::Stats => run_ranking_stats().await,
        Command::Health => run_ranking_health().await,
        Command::Reorder(args) => run_reorder(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["talent-portal"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_feedback_submission() {
        let cli = Cli::try_parse_from([
            "talent-portal",
            "feedback",
            "submit",
            "--talent",
            "t1",
            "--job",
            "j1",
            "--kind",
            "downvote",
            "--expected-rank",
            "3",
        ])
        .expect("parses");

        let Some(Command::Feedback {
            command: FeedbackCommand::Submit(args),
        }) = cli.command
        else {
            panic!("expected feedback submit");
        };
        assert_eq!(args.talent, "t1");
        assert_eq!(args.kind, talent_portal::domain::FeedbackType::Downvote);
        assert_eq!(args.expected_rank, Some(3));
        assert_eq!(args.notes, None);
    }

    #[test]
    fn rejects_unknown_feedback_kind() {
        let result = Cli::try_parse_from([
            "talent-portal",
            "feedback",
            "submit",
            "--talent",
            "t1",
            "--job",
            "j1",
            "--kind",
            "meh",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn rank_enables_feedback_unless_disabled() {
        let cli = Cli::try_parse_from(["talent-portal", "rank", "j1", "--talent", "t1,t2"])
            .expect("parses");
        let Some(Command::Rank(args)) = cli.command else {
            panic!("expected rank");
        };
        assert!(!args.no_feedback);
        assert_eq!(args.talents, vec!["t1", "t2"]);
    }
}
