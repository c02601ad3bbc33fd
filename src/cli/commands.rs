//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// eframe-pagination CLI
#[derive(Parser, Debug)]
#[command(name = "eframe-pagination")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination config file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page summary for a request
    Summary {
        #[command(flatten)]
        args: PageArgs,
    },

    /// Print the URL of a given page
    Url {
        /// Target page (values below 1 link to page 1)
        #[arg(long, allow_negative_numbers = true)]
        page: i64,

        #[command(flatten)]
        args: PageArgs,
    },

    /// Print the effective configuration
    Config,
}

/// Request and page arguments shared by subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Request target: `/path?query`, a bare query string, or an absolute URL
    #[arg(short, long, default_value = "")]
    pub request: String,

    /// JSON file holding the items of the current page (an array)
    #[arg(short, long)]
    pub items: Option<PathBuf>,

    /// Page size when the request has no limit (overrides config)
    #[arg(long)]
    pub per_page: Option<u64>,

    /// Base path for links (defaults to the request path)
    #[arg(long)]
    pub path: Option<String>,

    /// Extra query parameter kept on every link (`key=value`, repeatable)
    #[arg(short, long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,

    /// URL fragment appended to links
    #[arg(long)]
    pub fragment: Option<String>,

    /// More items exist after this page
    #[arg(long)]
    pub has_more: bool,

    /// Resolve the let offset from the request
    #[arg(long)]
    pub with_let: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary() {
        let cli = Cli::try_parse_from([
            "eframe-pagination",
            "summary",
            "--request",
            "/posts?page=2",
            "-q",
            "sort=asc",
            "--has-more",
        ])
        .unwrap();

        match cli.command {
            Commands::Summary { args } => {
                assert_eq!(args.request, "/posts?page=2");
                assert_eq!(args.query, vec![("sort".to_string(), "asc".to_string())]);
                assert!(args.has_more);
                assert!(!args.with_let);
            }
            other => panic!("Expected Summary, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_url_negative_page() {
        let cli = Cli::try_parse_from(["eframe-pagination", "url", "--page", "-3"]).unwrap();
        match cli.command {
            Commands::Url { page, .. } => assert_eq!(page, -3),
            other => panic!("Expected Url, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}
