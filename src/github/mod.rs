pub mod fixture;
mod http;
pub mod labels;

pub use fixture::FixtureSource;

use crate::config::Config;
use crate::error::FeedbackError;
use crate::models::{FEEDBACK_LABEL, FeedbackRecord, NEGATIVE_LABEL, POSITIVE_LABEL};
use crate::voting::extract_doc_path;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use self::http::check_response;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PER_PAGE: usize = 100;
const MAX_PAGES: usize = 50;

/// Anything that can hand the pipeline a fully materialized list of records.
#[async_trait]
pub trait TicketSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<FeedbackRecord>, FeedbackError>;
}

/// An issue as the GitHub REST API returns it, trimmed to the fields we use.
/// Local fixtures use the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<serde_json::Value>,
}

/// GitHub sends label objects, but older payloads and hand-written fixtures
/// sometimes use bare names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Object { name: String },
    Name(String),
}

impl Label {
    pub fn name(&self) -> &str {
        match self {
            Label::Object { name } | Label::Name(name) => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub login: Option<String>,
}

impl Issue {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name() == name)
    }

    /// True when the issue names a document and carries a vote label.
    pub fn is_vote(&self) -> bool {
        let has_doc = self.body.as_deref().and_then(extract_doc_path).is_some();
        has_doc && (self.has_label(POSITIVE_LABEL) || self.has_label(NEGATIVE_LABEL))
    }
}

impl From<Issue> for FeedbackRecord {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.id,
            created_at: issue.created_at,
            author: issue.user.and_then(|u| u.login),
            body: issue.body,
            tags: issue.labels.iter().map(|l| l.name().to_string()).collect(),
        }
    }
}

/// Parses a JSON array of issues.
pub fn parse_issues(json: &str) -> Result<Vec<Issue>, FeedbackError> {
    Ok(serde_json::from_str(json)?)
}

pub struct GitHubClient {
    http: reqwest::Client,
    config: Config,
}

impl GitHubClient {
    pub fn new(config: Config) -> Result<Self, FeedbackError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("thumbs-up/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn repository(&self) -> String {
        format!("{}/{}", self.config.owner, self.config.repo)
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.config.api_url, self.config.owner, self.config.repo, path
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
    }

    /// Lists every issue (open and closed) carrying the feedback label.
    pub async fn list_feedback_issues(&self) -> Result<Vec<Issue>, FeedbackError> {
        let resource = format!("repository {}", self.repository());
        let mut issues = Vec::new();

        for page in 1..=MAX_PAGES {
            let url = self.repo_url(&format!(
                "/issues?labels={}&state=all&per_page={}&page={}",
                FEEDBACK_LABEL, PER_PAGE, page
            ));
            let resp = self.request(reqwest::Method::GET, &url).send().await?;
            let batch: Vec<Issue> = check_response(resp, &resource).await?.json().await?;
            let short_page = batch.len() < PER_PAGE;
            issues.extend(batch);

            if short_page {
                return Ok(issues);
            }
        }

        warn!(
            "Stopped paging {} after {} pages; later issues were not fetched",
            self.repository(),
            MAX_PAGES
        );
        Ok(issues)
    }
}

#[async_trait]
impl TicketSource for GitHubClient {
    async fn fetch_records(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        info!("Fetching feedback issues from {}...", self.repository());
        let issues = self.list_feedback_issues().await?;
        info!("Found {} feedback issues", issues.len());

        if let Some(sample) = issues.first() {
            debug!(
                "Sample issue: id={} title={:?} labels={:?}",
                sample.id,
                sample.title,
                sample.labels.iter().map(Label::name).collect::<Vec<_>>()
            );
        }

        let records: Vec<FeedbackRecord> = issues
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .filter(|issue| {
                let keep = issue.is_vote();
                if !keep {
                    info!(
                        "Skipping malformed issue #{}: {}",
                        issue.id,
                        issue.title.as_deref().unwrap_or("")
                    );
                }
                keep
            })
            .map(FeedbackRecord::from)
            .collect();

        info!("Filtered to {} valid feedback issues", records.len());
        Ok(records)
    }
}
