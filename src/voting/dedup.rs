use crate::models::FeedbackRecord;
use crate::voting::extract_doc_path;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Collapses raw feedback into one record per (document, voter), keeping the
/// most recent one.
///
/// Records without a document path or a voter are dropped. A later record only
/// replaces the kept one when its timestamp is strictly greater, so on an exact
/// tie the first record seen stays. Output follows the order in which each key
/// first appeared.
pub fn deduplicate(records: &[FeedbackRecord]) -> Vec<FeedbackRecord> {
    let mut latest: Vec<FeedbackRecord> = Vec::new();
    let mut slots: HashMap<(String, String), usize> = HashMap::new();

    for record in records {
        let (Some(doc_path), Some(voter)) = (
            record.body.as_deref().and_then(extract_doc_path),
            record.voter(),
        ) else {
            continue;
        };

        match slots.entry((doc_path, voter.to_string())) {
            Entry::Occupied(slot) => {
                let kept = &mut latest[*slot.get()];
                if record.created_at > kept.created_at {
                    *kept = record.clone();
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(latest.len());
                latest.push(record.clone());
            }
        }
    }

    latest
}
