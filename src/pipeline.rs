use crate::error::FeedbackError;
use crate::models::{FeedbackRecord, StatisticsMap};
use crate::report::{Clock, render};
use crate::voting::{aggregate, deduplicate};
use log::info;
use std::path::Path;

pub const DEFAULT_OUTPUT: &str = "thumbs-up.md";
const PREVIEW_LINES: usize = 15;

/// Everything one run of deduplicate -> aggregate -> render produced.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub raw_count: usize,
    pub votes: Vec<FeedbackRecord>,
    pub stats: StatisticsMap,
    pub report: String,
}

pub fn run(records: &[FeedbackRecord], clock: &dyn Clock) -> PipelineOutput {
    info!("Step 1: Deduplicating votes...");
    let votes = deduplicate(records);
    info!(
        "Deduplicated {} issues down to {} unique votes",
        records.len(),
        votes.len()
    );

    info!("Step 2: Aggregating statistics...");
    let stats = aggregate(&votes);
    info!("Aggregated stats for {} documents", stats.len());

    info!("Step 3: Building markdown dashboard...");
    let report = render(&stats, clock);

    PipelineOutput {
        raw_count: records.len(),
        votes,
        stats,
        report,
    }
}

/// Writes the report to `path`.
pub async fn write_report(path: &Path, report: &str) -> Result<(), FeedbackError> {
    tokio::fs::write(path, report).await?;
    info!("Dashboard written to: {}", path.display());
    Ok(())
}

/// The first lines of the report, for a console preview.
pub fn preview(report: &str) -> String {
    report
        .lines()
        .take(PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::FixedClock;
    use chrono::NaiveDate;

    #[test]
    fn empty_run_renders_no_data() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        let output = run(&[], &clock);
        assert_eq!(output.raw_count, 0);
        assert!(output.votes.is_empty());
        assert!(output.stats.is_empty());
        assert!(output.report.contains("No feedback data available."));
    }

    #[test]
    fn preview_keeps_first_lines() {
        let report: String = (1..=20).map(|i| format!("line {i}\n")).collect();
        let shown = preview(&report);
        assert_eq!(shown.lines().count(), 15);
        assert!(shown.ends_with("line 15"));
    }

    #[tokio::test]
    async fn writes_report_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        write_report(&path, "# Dashboard\n").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Dashboard\n");
    }
}
