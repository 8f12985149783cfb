use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label every feedback issue carries.
pub const FEEDBACK_LABEL: &str = "doc-feedback";
/// Label marking a "helpful" vote.
pub const POSITIVE_LABEL: &str = "thumbs-up";
/// Label marking a "needs work" vote.
pub const NEGATIVE_LABEL: &str = "thumbs-down";

/// One reader's opinion on one document at one point in time.
///
/// `author` and `body` are optional because the tracker hands us whatever
/// tickets share the label; records missing either are treated as malformed
/// by the voting stages rather than rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub tags: Vec<String>,
}

impl FeedbackRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_positive(&self) -> bool {
        self.has_tag(POSITIVE_LABEL)
    }

    pub fn is_negative(&self) -> bool {
        self.has_tag(NEGATIVE_LABEL)
    }

    /// The voter login exactly as the tracker reported it. Empty or
    /// whitespace-only logins count as missing.
    pub fn voter(&self) -> Option<&str> {
        self.author
            .as_deref()
            .filter(|login| !login.trim().is_empty())
    }
}

/// Aggregated votes for a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteTally {
    pub up: u32,
    pub down: u32,
    pub ratio: f64,
    pub last_updated: DateTime<Utc>,
}

impl VoteTally {
    pub fn new(first_seen: DateTime<Utc>) -> Self {
        Self {
            up: 0,
            down: 0,
            ratio: 0.0,
            last_updated: first_seen,
        }
    }

    pub fn total(&self) -> u32 {
        self.up + self.down
    }
}

/// Document path -> tally. Ordered so iteration is reproducible.
pub type StatisticsMap = BTreeMap<String, VoteTally>;
