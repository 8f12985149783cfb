use crate::error::FeedbackError;
use crate::github::{TicketSource, parse_issues};
use crate::models::FeedbackRecord;
use async_trait::async_trait;
use log::info;
use std::path::PathBuf;

pub const DEFAULT_FIXTURE: &str = "fixtures/issues-basic.json";

/// Reads issues from a local JSON file instead of the API.
///
/// Nothing is filtered here; malformed entries reach the pipeline so its own
/// skipping rules apply.
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TicketSource for FixtureSource {
    async fn fetch_records(&self) -> Result<Vec<FeedbackRecord>, FeedbackError> {
        info!("Reading test fixtures from {}", self.path.display());
        let data = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<FeedbackRecord> = parse_issues(&data)?
            .into_iter()
            .map(FeedbackRecord::from)
            .collect();
        info!("Loaded {} issues from fixtures", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 7, "labels": [{{"name": "thumbs-up"}}], "body": "Doc: a.md",
                "user": {{"login": "alice"}}, "created_at": "2025-01-15T10:00:00Z"}}]"#
        )
        .unwrap();

        let records = FixtureSource::new(file.path()).fetch_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);
        assert!(records[0].is_positive());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let err = FixtureSource::new("does/not/exist.json")
            .fetch_records()
            .await
            .unwrap_err();
        assert!(matches!(err, FeedbackError::Io(_)));
    }
}
