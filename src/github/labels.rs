use crate::error::FeedbackError;
use crate::github::GitHubClient;
use crate::github::http::check_response;
use crate::models::{FEEDBACK_LABEL, NEGATIVE_LABEL, POSITIVE_LABEL};
use log::{error, info};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const REQUIRED_LABELS: [LabelSpec; 3] = [
    LabelSpec {
        name: FEEDBACK_LABEL,
        description: "Documentation feedback from readers",
        color: "0366d6",
    },
    LabelSpec {
        name: POSITIVE_LABEL,
        description: "Positive documentation feedback",
        color: "28a745",
    },
    LabelSpec {
        name: NEGATIVE_LABEL,
        description: "Negative documentation feedback",
        color: "d73a49",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    AlreadyExists,
    Created,
    Failed(String),
}

impl GitHubClient {
    pub async fn get_label(&self, name: &str) -> Result<(), FeedbackError> {
        let url = self.repo_url(&format!("/labels/{}", urlencoding::encode(name)));
        let resp = self.request(reqwest::Method::GET, &url).send().await?;
        check_response(resp, &format!("label '{}' in {}", name, self.repository())).await?;
        Ok(())
    }

    pub async fn create_label(&self, spec: &LabelSpec) -> Result<(), FeedbackError> {
        let url = self.repo_url("/labels");
        let resp = self
            .request(reqwest::Method::POST, &url)
            .json(spec)
            .send()
            .await?;
        check_response(resp, &format!("repository {}", self.repository())).await?;
        Ok(())
    }

    /// Makes sure every label the widget links rely on exists, creating the
    /// missing ones. A failure on one label does not stop the others.
    pub async fn ensure_labels(&self) -> Vec<(&'static str, LabelOutcome)> {
        info!("Setting up labels for {}...", self.repository());
        let mut outcomes = Vec::with_capacity(REQUIRED_LABELS.len());

        for spec in &REQUIRED_LABELS {
            let outcome = match self.get_label(spec.name).await {
                Ok(()) => {
                    info!("Label '{}' already exists", spec.name);
                    LabelOutcome::AlreadyExists
                }
                Err(FeedbackError::NotFound(_)) => match self.create_label(spec).await {
                    Ok(()) => {
                        info!("Created label '{}'", spec.name);
                        LabelOutcome::Created
                    }
                    Err(e) => {
                        error!("Failed to create label '{}': {}", spec.name, e);
                        LabelOutcome::Failed(e.to_string())
                    }
                },
                Err(e) => {
                    error!("Error checking label '{}': {}", spec.name, e);
                    LabelOutcome::Failed(e.to_string())
                }
            };
            outcomes.push((spec.name, outcome));
        }

        outcomes
    }
}

/// Turns per-label outcomes into an overall result, naming every label that
/// could not be verified or created.
pub fn check_outcomes(outcomes: &[(&str, LabelOutcome)]) -> Result<(), FeedbackError> {
    let failed: Vec<String> = outcomes
        .iter()
        .filter(|(_, outcome)| matches!(outcome, LabelOutcome::Failed(_)))
        .map(|(name, _)| name.to_string())
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(FeedbackError::LabelSetup(failed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_and_created_labels_succeed() {
        let outcomes = [
            (FEEDBACK_LABEL, LabelOutcome::AlreadyExists),
            (POSITIVE_LABEL, LabelOutcome::Created),
            (NEGATIVE_LABEL, LabelOutcome::AlreadyExists),
        ];
        assert!(check_outcomes(&outcomes).is_ok());
    }

    #[test]
    fn any_failed_label_fails_the_setup() {
        let outcomes = [
            (FEEDBACK_LABEL, LabelOutcome::AlreadyExists),
            (POSITIVE_LABEL, LabelOutcome::Failed("forbidden".to_string())),
            (NEGATIVE_LABEL, LabelOutcome::Failed("rate limited".to_string())),
        ];
        let err = check_outcomes(&outcomes).unwrap_err();
        assert!(matches!(&err, FeedbackError::LabelSetup(names) if names == &["thumbs-up", "thumbs-down"]));
        assert_eq!(err.to_string(), "label setup failed for: thumbs-up, thumbs-down");
    }

    #[test]
    fn required_labels_cover_feedback_and_both_votes() {
        let names: Vec<&str> = REQUIRED_LABELS.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["doc-feedback", "thumbs-up", "thumbs-down"]);
    }

    #[test]
    fn label_payload_matches_github_schema() {
        let json = serde_json::to_value(REQUIRED_LABELS[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "thumbs-up",
                "description": "Positive documentation feedback",
                "color": "28a745"
            })
        );
    }
}
