use thiserror::Error;

/// Failures at the edges of the pipeline: configuration, the issue tracker,
/// and local files. The voting and report stages themselves cannot fail.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0} not found or not accessible")]
    NotFound(String),

    #[error("invalid GitHub token or insufficient permissions")]
    Unauthorized,

    #[error("GitHub API rate limit exceeded")]
    RateLimited,

    #[error("GitHub API request forbidden: {0}")]
    Forbidden(String),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse issues: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("label setup failed for: {}", .0.join(", "))]
    LabelSetup(Vec<String>),

    #[error("invalid document path: {0}")]
    InvalidDocPath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
