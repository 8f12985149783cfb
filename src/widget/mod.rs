use crate::error::FeedbackError;
use crate::models::{FEEDBACK_LABEL, NEGATIVE_LABEL, POSITIVE_LABEL};

pub const WIDGET_MARKER: &str = "<!-- FEEDBACK -->";

/// The pair of pre-filled "new issue" links for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLinks {
    pub helpful: String,
    pub needs_work: String,
}

// Marks that form encoding leaves as-is but `urlencoding` escapes.
const UNESCAPED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes `text` for a query string, with spaces rendered as `+`.
///
/// Matches `encodeURIComponent`: `!'()*` stay literal.
pub fn encode_for_url(text: &str) -> String {
    let mut encoded = urlencoding::encode(text).replace("%20", "+");
    for (escaped, mark) in UNESCAPED_MARKS {
        encoded = encoded.replace(escaped, mark);
    }
    encoded
}

/// Paths are taken relative to the repository root.
pub fn validate_doc_path(path: &str) -> Result<(), FeedbackError> {
    if path.trim().is_empty() {
        return Err(FeedbackError::InvalidDocPath(
            "document path must not be empty".to_string(),
        ));
    }
    if path.starts_with('/') {
        return Err(FeedbackError::InvalidDocPath(format!(
            "path should not start with \"/\", use a path relative to the repo root (e.g. {} rather than {})",
            path.trim_start_matches('/'),
            path
        )));
    }
    Ok(())
}

pub fn widget_links(doc_path: &str) -> WidgetLinks {
    let encoded = encode_for_url(doc_path);
    WidgetLinks {
        helpful: format!(
            "[👍 This doc was helpful]({})",
            new_issue_url(&encoded, POSITIVE_LABEL, "👍")
        ),
        needs_work: format!(
            "[👎 This doc needs work]({})",
            new_issue_url(&encoded, NEGATIVE_LABEL, "👎")
        ),
    }
}

/// The snippet to paste at the bottom of a Markdown page.
pub fn generate_widget(doc_path: &str) -> String {
    let links = widget_links(doc_path);
    format!("{}\n{}\n{}", WIDGET_MARKER, links.helpful, links.needs_work)
}

fn new_issue_url(encoded_path: &str, vote_label: &str, emoji: &str) -> String {
    format!(
        "../../issues/new?labels={},{}&title=Feedback:+{}+{}&body=Doc:+{}",
        FEEDBACK_LABEL, vote_label, encoded_path, emoji, encoded_path
    )
}
