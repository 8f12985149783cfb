use crate::error::FeedbackError;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Settings for talking to the GitHub API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub api_url: String,
}

impl Config {
    /// Reads `GITHUB_TOKEN`, `GITHUB_REPOSITORY` and the optional
    /// `GITHUB_API_URL` from the process environment.
    pub fn from_env() -> Result<Self, FeedbackError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FeedbackError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("GITHUB_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                FeedbackError::Config("GITHUB_TOKEN environment variable is required".to_string())
            })?;

        let repository = lookup("GITHUB_REPOSITORY")
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| {
                FeedbackError::Config(
                    "GITHUB_REPOSITORY environment variable is required (format: owner/repo)"
                        .to_string(),
                )
            })?;
        let (owner, repo) = parse_repository(&repository)?;

        let api_url = lookup("GITHUB_API_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            token,
            owner,
            repo,
            api_url,
        })
    }
}

/// Splits `owner/repo`.
pub fn parse_repository(repository: &str) -> Result<(String, String), FeedbackError> {
    match repository.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(FeedbackError::Config(
            "GITHUB_REPOSITORY must be in format: owner/repo".to_string(),
        )),
    }
}
