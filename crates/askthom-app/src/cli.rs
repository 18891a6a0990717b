use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use askthom_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// CLI arguments for askthom
#[derive(Parser, Debug)]
#[command(name = "askthom")]
#[command(about = "AskThom - Thomas International talent assistant in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Assistant service base URL (e.g., http://localhost:8000)
    /// The full endpoint URL is accepted as well
    #[arg(long, value_name = "URL", env = "ASKTHOM_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Page context tag the widget is embedded in (negotiation, psychometric, churn-risk...)
    #[arg(long, value_name = "CONTEXT", env = "ASKTHOM_CONTEXT", default_value = "default")]
    pub context: String,

    /// JSON file with extra context data sent along with every question
    #[arg(long, value_name = "FILE")]
    pub context_data: Option<PathBuf>,

    /// JSON file describing the page the user is looking at
    #[arg(long, value_name = "FILE")]
    pub page_context: Option<PathBuf>,

    /// Upper bound for one request, in seconds
    #[arg(
        long,
        value_name = "SECS",
        env = "ASKTHOM_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Never contact the service; answer from the local fallback rules
    #[arg(long)]
    pub offline: bool,

    /// Enable verbose debug output (requests, page context changes, fallbacks)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Ask a single question and print the reply
    Ask {
        /// Question text; multiple words are joined with spaces
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Render assistant markup (bold, bullets, keywords) from a file or stdin
    Render {
        /// File to render; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["askthom"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!cli.offline);
        assert!(cli.context_data.is_none());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::try_parse_from([
            "askthom",
            "--context",
            "negotiation",
            "--offline",
            "ask",
            "Is",
            "this",
            "offer",
            "competitive?",
        ])
        .unwrap();

        assert_eq!(cli.context, "negotiation");
        assert!(cli.offline);
        match cli.command {
            Some(Commands::Ask { question }) => {
                assert_eq!(question.join(" "), "Is this offer competitive?")
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_ask_requires_question() {
        assert!(Cli::try_parse_from(["askthom", "ask"]).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["askthom", "--timeout-secs", "0"]).is_err());
    }

    #[test]
    fn test_render_file_optional() {
        let cli = Cli::try_parse_from(["askthom", "render"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Render { file: None }));

        let cli = Cli::try_parse_from(["askthom", "render", "reply.md"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Render {
                file: Some(PathBuf::from("reply.md"))
            })
        );
    }
}
