use crate::models::{StatisticsMap, VoteTally};
use chrono::{NaiveDate, Utc};
use std::cmp::Ordering;

pub const REPORT_TITLE: &str = "Documentation Feedback Dashboard";
pub const NO_DATA_MESSAGE: &str = "No feedback data available.";
pub const NOTHING_NEEDS_ATTENTION: &str = "No documents need attention.";
pub const NO_TOP_RATED: &str = "No documents meet top rated criteria (>90% score with >=5 votes).";

const ATTENTION_RATIO: f64 = 0.5;
const TOP_RATED_RATIO: f64 = 0.9;
const TOP_RATED_MIN_VOTES: u32 = 5;

/// Source of the date stamped on a report.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Renders the Markdown dashboard.
///
/// Rows are ranked by descending ratio, ties by ascending document path. An
/// empty map renders only the heading and a "no data" line.
pub fn render(stats: &StatisticsMap, clock: &dyn Clock) -> String {
    let mut markdown = format!("# {}\n\n", REPORT_TITLE);
    markdown.push_str(&format!("Last updated: {}\n\n", clock.today().format("%Y-%m-%d")));

    if stats.is_empty() {
        markdown.push_str(NO_DATA_MESSAGE);
        markdown.push('\n');
        return markdown;
    }

    let mut entries: Vec<(&String, &VoteTally)> = stats.iter().collect();
    entries.sort_by(|a, b| {
        b.1.ratio
            .partial_cmp(&a.1.ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    markdown.push_str("| Document | 👍 | 👎 | Score | Last Feedback |\n");
    markdown.push_str("|----------|----|----|-------|---------------|\n");
    for (doc_path, tally) in &entries {
        markdown.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            doc_path,
            tally.up,
            tally.down,
            format_percent(tally.ratio),
            tally.last_updated.format("%Y-%m-%d")
        ));
    }
    markdown.push('\n');

    let needs_attention: Vec<_> = entries
        .iter()
        .filter(|(_, tally)| tally.ratio < ATTENTION_RATIO)
        .collect();

    markdown.push_str("## Needs Attention\n\n");
    if needs_attention.is_empty() {
        markdown.push_str(NOTHING_NEEDS_ATTENTION);
        markdown.push_str("\n\n");
    } else {
        for (doc_path, tally) in needs_attention {
            markdown.push_str(&summary_line(doc_path, tally));
        }
        markdown.push('\n');
    }

    let top_rated: Vec<_> = entries
        .iter()
        .filter(|(_, tally)| tally.ratio > TOP_RATED_RATIO && tally.total() >= TOP_RATED_MIN_VOTES)
        .collect();

    markdown.push_str("## Top Rated\n\n");
    if top_rated.is_empty() {
        markdown.push_str(NO_TOP_RATED);
        markdown.push('\n');
    } else {
        for (doc_path, tally) in top_rated {
            markdown.push_str(&summary_line(doc_path, tally));
        }
    }

    markdown
}

/// `0.25` -> `"25.0%"`. Halves round away from zero.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", (ratio * 1000.0).round() / 10.0)
}

fn summary_line(doc_path: &str, tally: &VoteTally) -> String {
    format!(
        "- **{}** - {} ({} up, {} down)\n",
        doc_path,
        format_percent(tally.ratio),
        tally.up,
        tally.down
    )
}
