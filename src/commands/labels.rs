use crate::config::Config;
use crate::error::FeedbackError;
use crate::github::GitHubClient;
use crate::github::labels::check_outcomes;
use log::info;

/// Fails when any required label could not be verified or created, so the
/// process exits non-zero.
pub async fn handle_labels() -> Result<(), FeedbackError> {
    let client = GitHubClient::new(Config::from_env()?)?;
    let outcomes = client.ensure_labels().await;

    check_outcomes(&outcomes)?;
    info!("Label setup complete!");
    Ok(())
}
