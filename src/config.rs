//! Pagination configuration
//!
//! Parameter names and page-size limits shared by every paginator an
//! application builds. Loaded once at startup from YAML or JSON.
//!
//! ```yaml
//! page_name: page
//! let_name: let
//! per_page_name: limit
//! default_per_page: 15
//! max_per_page: 100
//! with_let: true
//! ```

use crate::error::{Error, Result};
use crate::types::{DEFAULT_LET_NAME, DEFAULT_PAGE_NAME, DEFAULT_PER_PAGE, DEFAULT_PER_PAGE_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application-wide pagination settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    /// Query parameter for the page number
    pub page_name: String,

    /// Query parameter for the let offset
    pub let_name: String,

    /// Query parameter for the per-page size
    pub per_page_name: String,

    /// Page size when the request does not ask for one
    pub default_per_page: u64,

    /// Upper bound for requested page sizes
    pub max_per_page: Option<u64>,

    /// Compute the let offset for every paginator
    pub with_let: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_name: DEFAULT_PAGE_NAME.to_string(),
            let_name: DEFAULT_LET_NAME.to_string(),
            per_page_name: DEFAULT_PER_PAGE_NAME.to_string(),
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: None,
            with_let: false,
        }
    }
}

impl PaginationConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a YAML configuration
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_page_name(mut self, name: impl Into<String>) -> Self {
        self.page_name = name.into();
        self
    }

    #[must_use]
    pub fn with_let_name(mut self, name: impl Into<String>) -> Self {
        self.let_name = name.into();
        self
    }

    #[must_use]
    pub fn with_per_page_name(mut self, name: impl Into<String>) -> Self {
        self.per_page_name = name.into();
        self
    }

    #[must_use]
    pub fn with_default_per_page(mut self, per_page: u64) -> Self {
        self.default_per_page = per_page;
        self
    }

    #[must_use]
    pub fn with_max_per_page(mut self, max: u64) -> Self {
        self.max_per_page = Some(max);
        self
    }

    #[must_use]
    pub fn with_let(mut self, enabled: bool) -> Self {
        self.with_let = enabled;
        self
    }

    /// Validate parameter names and page-size bounds
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("page_name", &self.page_name),
            ("let_name", &self.let_name),
            ("per_page_name", &self.per_page_name),
        ];

        for (field, name) in names {
            if name.trim().is_empty() {
                return Err(Error::invalid_value(field, "must not be empty"));
            }
        }

        for (i, (field, name)) in names.iter().enumerate() {
            if let Some((other, _)) = names[i + 1..].iter().find(|(_, n)| n == name) {
                return Err(Error::invalid_value(
                    *other,
                    format!("'{name}' is already used by {field}"),
                ));
            }
        }

        if let Some(max) = self.max_per_page {
            if max == 0 {
                return Err(Error::invalid_value(
                    "max_per_page",
                    "must be greater than zero",
                ));
            }
            if self.default_per_page > max {
                return Err(Error::invalid_value(
                    "default_per_page",
                    format!("{} exceeds max_per_page {max}", self.default_per_page),
                ));
            }
        }

        Ok(())
    }
}

/// Load a configuration file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<PaginationConfig> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        PaginationConfig::from_json_str(&content)
    } else {
        PaginationConfig::from_yaml_str(&content)
    }
}
