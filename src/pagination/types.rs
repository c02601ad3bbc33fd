//! Pagination types
//!
//! Construction options and the serialized page summary.

use crate::types::QueryMap;
use serde::Serialize;
use serde_json::Value;

/// Options bag for building a paginator
///
/// Unset names fall back to `page`, `let` and `limit`; an unset path falls
/// back to `/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginatorOptions {
    /// Base path for generated URLs (may already carry a query string)
    pub path: Option<String>,
    /// Extra query parameters preserved on every generated URL
    pub query: QueryMap,
    /// URL fragment, without the leading `#`
    pub fragment: Option<String>,
    /// Query parameter for the page number
    pub page_name: Option<String>,
    /// Query parameter for the let offset
    pub let_name: Option<String>,
    /// Query parameter for the per-page size
    pub per_page_name: Option<String>,
    /// Whether the paging mechanism found items past this page
    pub has_more: bool,
    /// Let request
    ///
    /// `None` leaves the let feature off. `Some(Value::Null)` (or any falsy
    /// value) asks the let resolver; anything else is validated as-is.
    pub current_let: Option<Value>,
}

impl PaginatorOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add an extra query parameter
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Replace all extra query parameters
    #[must_use]
    pub fn with_query_map(mut self, query: QueryMap) -> Self {
        self.query = query;
        self
    }

    /// Set the URL fragment
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Set the page parameter name
    #[must_use]
    pub fn with_page_name(mut self, name: impl Into<String>) -> Self {
        self.page_name = Some(name.into());
        self
    }

    /// Set the let parameter name
    #[must_use]
    pub fn with_let_name(mut self, name: impl Into<String>) -> Self {
        self.let_name = Some(name.into());
        self
    }

    /// Set the per-page parameter name
    #[must_use]
    pub fn with_per_page_name(mut self, name: impl Into<String>) -> Self {
        self.per_page_name = Some(name.into());
        self
    }

    /// Mark that more items exist past this page
    #[must_use]
    pub fn with_has_more(mut self, has_more: bool) -> Self {
        self.has_more = has_more;
        self
    }

    /// Request the let feature with an explicit raw value
    #[must_use]
    pub fn with_current_let(mut self, value: impl Into<Value>) -> Self {
        self.current_let = Some(value.into());
        self
    }

    /// Request the let feature, resolving the value from the request
    #[must_use]
    pub fn with_resolved_let(mut self) -> Self {
        self.current_let = Some(Value::Null);
        self
    }

    /// Check whether the let feature was requested
    pub fn wants_let(&self) -> bool {
        self.current_let.is_some()
    }
}

/// Structured page summary for API responses
///
/// Field names and order are the wire format consumed by API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary<'a, T> {
    pub current_page: u64,
    pub current_let: Option<u64>,
    pub data: &'a [T],
    pub first_page_url: String,
    pub from: Option<u64>,
    pub next_page_url: Option<String>,
    pub path: &'a str,
    pub per_page: u64,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
}
