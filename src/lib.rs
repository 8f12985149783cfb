//! Turns "was this doc helpful?" issues into a Markdown dashboard.
//!
//! Raw issues are deduplicated to one vote per reader per document
//! ([`voting::deduplicate`]), folded into per-document tallies
//! ([`voting::aggregate`]) and rendered as a ranked report ([`report::render`]).

pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod voting;
pub mod widget;

pub use error::FeedbackError;
pub use models::{FeedbackRecord, StatisticsMap, VoteTally};
