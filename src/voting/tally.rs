use crate::models::{FeedbackRecord, StatisticsMap, VoteTally};
use crate::voting::extract_doc_path;

/// Folds feedback records into per-document tallies.
///
/// Input is expected to be deduplicated already; raw input simply produces raw
/// counts. A record tagged both ways counts on both sides.
pub fn aggregate(records: &[FeedbackRecord]) -> StatisticsMap {
    let mut stats = StatisticsMap::new();

    for record in records {
        let Some(doc_path) = record.body.as_deref().and_then(extract_doc_path) else {
            continue;
        };

        let tally = stats
            .entry(doc_path)
            .or_insert_with(|| VoteTally::new(record.created_at));

        if record.is_positive() {
            tally.up += 1;
        }
        if record.is_negative() {
            tally.down += 1;
        }
        if record.created_at > tally.last_updated {
            tally.last_updated = record.created_at;
        }
    }

    // Ratios come from final totals, never running counts.
    for tally in stats.values_mut() {
        let total = tally.total();
        tally.ratio = if total > 0 {
            f64::from(tally.up) / f64::from(total)
        } else {
            0.0
        };
    }

    stats
}
