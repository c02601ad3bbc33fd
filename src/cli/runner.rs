//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PageArgs};
use crate::config::{load_config, PaginationConfig};
use crate::error::{Error, Result, ResultExt};
use crate::factory::PaginatorFactory;
use crate::pagination::{Paginator, PaginatorOptions};
use crate::resolver::QueryResolver;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output instead of printing it
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Summary { args } => {
                let paginator = self.build_paginator(args)?;
                self.render(&paginator.to_json()?)
            }
            Commands::Url { page, args } => {
                let paginator = self.build_paginator(args)?;
                Ok(paginator.url(*page))
            }
            Commands::Config => {
                let config = serde_json::to_value(self.load_config()?)?;
                self.render(&config)
            }
        }
    }

    /// Load configuration, falling back to defaults
    fn load_config(&self) -> Result<PaginationConfig> {
        match &self.cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config '{}'", path.display())),
            None => Ok(PaginationConfig::default()),
        }
    }

    fn build_paginator(&self, args: &PageArgs) -> Result<Paginator<Value>> {
        let mut config = self.load_config()?;
        if let Some(per_page) = args.per_page {
            config.default_per_page = per_page;
            config.validate()?;
        }

        let resolver = parse_request(&args.request)?;
        debug!(request = %args.request, ?resolver, "Resolved request");

        let factory = PaginatorFactory::new(config, Arc::new(resolver));
        let items = match &args.items {
            Some(path) => load_items(path).context("Failed to load page items")?,
            None => Vec::new(),
        };

        Ok(factory.make_with(items, page_options(args)))
    }

    fn render(&self, value: &Value) -> Result<String> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }
}

/// Build a resolver from a request target
fn parse_request(target: &str) -> Result<QueryResolver> {
    if target.contains("://") {
        let url = Url::parse(target)?;
        Ok(QueryResolver::from_url(&url))
    } else {
        Ok(QueryResolver::parse(target))
    }
}

/// Load the page items from a JSON array file
fn load_items(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })?;

    let parsed: Value = serde_json::from_str(&content)?;
    match parsed {
        Value::Array(items) => Ok(items),
        other => Err(Error::config(format!(
            "Items file '{}' must contain a JSON array, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn page_options(args: &PageArgs) -> PaginatorOptions {
    let mut options = PaginatorOptions::new().with_has_more(args.has_more);

    if let Some(path) = &args.path {
        options = options.with_path(path);
    }
    if let Some(fragment) = &args.fragment {
        options = options.with_fragment(fragment);
    }
    for (key, value) in &args.query {
        options = options.with_query(key, value);
    }
    if args.with_let {
        options = options.with_resolved_let();
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use tempfile::Builder;

    fn run(args: &[&str]) -> Result<String> {
        let mut argv = vec!["eframe-pagination"];
        argv.extend_from_slice(args);
        Runner::new(Cli::try_parse_from(argv).unwrap()).execute()
    }

    #[test]
    fn test_summary_from_request() {
        let mut items = Builder::new().suffix(".json").tempfile().unwrap();
        write!(items, r#"[{{"id": 4}}, {{"id": 5}}, {{"id": 6}}]"#).unwrap();

        let output = run(&[
            "summary",
            "--request",
            "/posts?page=2&limit=3&let=1",
            "--items",
            items.path().to_str().unwrap(),
            "--with-let",
            "--has-more",
        ])
        .unwrap();

        let summary: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            summary,
            json!({
                "current_page": 2,
                "current_let": 1,
                "data": [{"id": 4}, {"id": 5}, {"id": 6}],
                "first_page_url": "/posts?page=1&limit=3",
                "from": 4,
                "next_page_url": "/posts?page=3&limit=3",
                "path": "/posts",
                "per_page": 3,
                "prev_page_url": "/posts?page=1&limit=3",
                "to": 6
            })
        );
    }

    #[test]
    fn test_url_command() {
        let output = run(&[
            "url",
            "--page",
            "0",
            "--request",
            "https://example.com/search?q=rust&limit=20",
            "-q",
            "q=rust",
            "--fragment",
            "results",
        ])
        .unwrap();

        assert_eq!(
            output,
            "https://example.com/search?q=rust&page=1&limit=20#results"
        );
    }

    #[test]
    fn test_per_page_override() {
        let output = run(&["url", "--page", "2", "--per-page", "50"]).unwrap();
        assert_eq!(output, "/?page=2&limit=50");
    }

    #[test]
    fn test_items_must_be_array() {
        let mut items = Builder::new().suffix(".json").tempfile().unwrap();
        write!(items, r#"{{"id": 1}}"#).unwrap();

        let err = run(&["summary", "--items", items.path().to_str().unwrap()]).unwrap_err();
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_missing_items_file_has_context() {
        let err = run(&["summary", "--items", "/nonexistent/items.json"]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to load page items: File not found: /nonexistent/items.json"
        );
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_invalid_config_file_has_context() {
        let mut config = Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(config, "page_name: ''").unwrap();
        let path = config.path().to_str().unwrap();

        let err = run(&["-C", path, "config"]).unwrap_err();

        assert!(err
            .to_string()
            .starts_with(&format!("Failed to load config '{path}': ")));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_absolute_url() {
        let err = run(&["summary", "--request", "http://[::1"]).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_config_command_defaults() {
        let output = run(&["config"]).unwrap();
        let config: PaginationConfig = serde_json::from_str(&output).unwrap();
        assert_eq!(config, PaginationConfig::default());
    }
}
