use crate::config::Config;
use crate::error::FeedbackError;
use crate::github::fixture::DEFAULT_FIXTURE;
use crate::github::{FixtureSource, GitHubClient, TicketSource};
use crate::pipeline;
use crate::report::SystemClock;
use log::info;
use std::path::{Path, PathBuf};

pub async fn handle_build(
    mock: bool,
    fixture: Option<PathBuf>,
    output: &Path,
) -> Result<(), FeedbackError> {
    let source: Box<dyn TicketSource> = if mock {
        info!("Running in MOCK mode...");
        Box::new(FixtureSource::new(
            fixture.unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE)),
        ))
    } else {
        info!("Running in GITHUB mode...");
        Box::new(GitHubClient::new(Config::from_env()?)?)
    };

    let records = source.fetch_records().await?;
    let result = pipeline::run(&records, &SystemClock);
    pipeline::write_report(output, &result.report).await?;

    info!("Pipeline completed successfully!");
    println!("--- Dashboard Preview ---");
    println!("{}", pipeline::preview(&result.report));
    println!("...");

    Ok(())
}
