use crate::error::FeedbackError;
use crate::widget::{generate_widget, validate_doc_path};

const RULE: &str = "========================================";

pub fn handle_widget(path: &str) -> Result<(), FeedbackError> {
    validate_doc_path(path)?;

    println!("{RULE}");
    println!("Feedback Widget for: {path}");
    println!("{RULE}");
    println!("Copy and paste this at the bottom of your Markdown file:");
    println!();
    println!("{}", generate_widget(path));
    println!("{RULE}");

    Ok(())
}
