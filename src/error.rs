//! Error types for eframe-pagination
//!
//! Building a paginator never fails: malformed page, let and limit input is
//! normalized to defaults. The variants below cover the fallible edges of the
//! crate (configuration loading, JSON encoding and the CLI).

use thiserror::Error;

/// The main error type for eframe-pagination
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // URL Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Wrapped Errors
    // ============================================================================
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error came from user-supplied configuration
    ///
    /// Looks through any context added on the way up.
    pub fn is_config_error(&self) -> bool {
        match self {
            Error::Config { .. }
            | Error::InvalidConfigValue { .. }
            | Error::YamlParse(_)
            | Error::JsonParse(_) => true,
            Error::Context { source, .. } => source.is_config_error(),
            _ => false,
        }
    }
}

/// Result type alias for eframe-pagination
pub type Result<T> = std::result::Result<T, Error>;

/// Wrap an error with a description of what was being attempted
pub trait ResultExt<T> {
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], building the message only on error
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.with_context(|| message.into())
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("page_name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'page_name': must not be empty"
        );

        let err = Error::file_not_found("pagination.yaml");
        assert_eq!(err.to_string(), "File not found: pagination.yaml");
    }

    #[test]
    fn test_is_config_error() {
        assert!(Error::config("bad").is_config_error());
        assert!(Error::invalid_value("max_per_page", "too small").is_config_error());
        assert!(!Error::file_not_found("x.yaml").is_config_error());
    }

    #[test]
    fn test_context_keeps_source() {
        let result: Result<()> = Err(Error::invalid_value("page_name", "must not be empty"));
        let err = result.context("Failed to load config 'p.yaml'").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Failed to load config 'p.yaml': Invalid config value for 'page_name': must not be empty"
        );
        assert!(err.is_config_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_context_from_foreign_error() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let err = io.with_context(|| "Failed to read items".to_string()).unwrap_err();

        match &err {
            Error::Context { source, .. } => assert!(matches!(**source, Error::Io(_))),
            other => panic!("Expected Context, got {other:?}"),
        }
        assert!(!err.is_config_error());
    }
}
