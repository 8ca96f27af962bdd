//! Pester CLI entrypoint for the review-wait polling run.

use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Utc;
use ortho_config::OrthoConfig;
use pester::{
    DiscussionGateway, OctocrabDiscussionGateway, OctocrabRepositoryGateway,
    OctocrabTimelineGateway, PersonalAccessToken, PesterConfig, PollError, RepositoryLocator,
    ReviewWaitAggregator, notify,
};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), PollError> {
    let config = load_config()?;

    let (owner, repo) = config.require_repository_info()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let locator = RepositoryLocator::from_owner_repo(owner, repo)?;

    let repository = OctocrabRepositoryGateway::for_token(&token, &locator)?;
    let timeline = OctocrabTimelineGateway::for_token(&token, &locator)?;
    let aggregator = ReviewWaitAggregator::new(&repository, &timeline, config.wait_hours);

    let now = Utc::now();
    let overdue = aggregator.collect_overdue(&locator, now).await?;
    let summary = notify::render_summary(&overdue, now);

    if summary.is_empty() {
        write_line("No reviews have been waiting beyond the threshold.")?;
        return Ok(());
    }

    write_line(&summary)?;

    if config.post {
        let discussions = OctocrabDiscussionGateway::for_token(&token, &locator)?;
        discussions
            .post_review_summary(&locator, &config.category, &summary)
            .await?;
        tracing::info!(category = %config.category, "posted review summary");
    }

    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PollError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PesterConfig, PollError> {
    PesterConfig::load().map_err(|error| PollError::Configuration {
        message: error.to_string(),
    })
}

fn write_line(message: &str) -> Result<(), PollError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|error| PollError::Io {
        message: error.to_string(),
    })
}
