pub mod dedup;
pub mod tally;

pub use dedup::deduplicate;
pub use tally::aggregate;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `.` stops at a newline, so a bare "Doc:" never captures the following line.
    static ref DOC_LINE: Regex = Regex::new(r"Doc:[ \t]*(.+)").unwrap();
}

/// Pulls the document path out of an issue body.
///
/// The path is the trimmed remainder of the first line containing `Doc:`
/// that has something after the prefix. Deduplication and aggregation both
/// go through here, so they always agree on which records are usable.
pub fn extract_doc_path(body: &str) -> Option<String> {
    DOC_LINE.captures_iter(body).find_map(|caps| {
        let path = caps.get(1)?.as_str().trim();
        (!path.is_empty()).then(|| path.to_string())
    })
}
