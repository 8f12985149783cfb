mod dashboard;
mod labels;
mod widget;

use crate::error::FeedbackError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "thumbs-up", version, about = "Documentation feedback dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch feedback issues and write the Markdown dashboard
    Build {
        /// Read issues from a local fixture instead of GitHub
        #[arg(long)]
        mock: bool,

        /// Fixture to read in mock mode
        #[arg(long, requires = "mock")]
        fixture: Option<PathBuf>,

        /// Where to write the dashboard
        #[arg(short, long, default_value = crate::pipeline::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Print the feedback widget snippet for a document
    Widget {
        /// Document path relative to the repository root, e.g. docs/api.md
        path: String,
    },
    /// Create the labels feedback issues rely on
    Labels,
}

pub async fn handle_command(cli: Cli) -> Result<(), FeedbackError> {
    match cli.command {
        Command::Build {
            mock,
            fixture,
            output,
        } => dashboard::handle_build(mock, fixture, &output).await,
        Command::Widget { path } => widget::handle_widget(&path),
        Command::Labels => labels::handle_labels().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_defaults_to_github_and_standard_output() {
        let cli = Cli::try_parse_from(["thumbs-up", "build"]).unwrap();
        match cli.command {
            Command::Build {
                mock,
                fixture,
                output,
            } => {
                assert!(!mock);
                assert!(fixture.is_none());
                assert_eq!(output, PathBuf::from("thumbs-up.md"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn fixture_requires_mock() {
        assert!(Cli::try_parse_from(["thumbs-up", "build", "--fixture", "a.json"]).is_err());
        assert!(
            Cli::try_parse_from(["thumbs-up", "build", "--mock", "--fixture", "a.json"]).is_ok()
        );
    }

    #[test]
    fn widget_requires_a_path() {
        assert!(Cli::try_parse_from(["thumbs-up", "widget"]).is_err());
        let cli = Cli::try_parse_from(["thumbs-up", "widget", "docs/my file.md"]).unwrap();
        assert!(matches!(cli.command, Command::Widget { path } if path == "docs/my file.md"));
    }
}
