//! Page/let/limit paginator
//!
//! Wraps [`SimplePaginator`] with a secondary "let" offset and a per-page
//! parameter that is re-asserted on every generated link.

use super::params::normalize_let;
use super::simple::{clamp_page, SimplePaginator};
use super::types::{PageSummary, PaginatorOptions};
use crate::error::Result;
use crate::resolver::ParamResolver;
use crate::types::{QueryMap, DEFAULT_LET_NAME, DEFAULT_PER_PAGE_NAME};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Pagination state for one response
///
/// Built once per request and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T> {
    base: SimplePaginator<T>,
    current_let: Option<u64>,
    let_name: String,
    per_page_name: String,
}

impl<T> Paginator<T> {
    /// Create a new paginator
    ///
    /// Page and let values that are missing or falsy are taken from
    /// `resolver`. Invalid values never fail construction: the page falls
    /// back to 1 and the let to 0. The let is only computed when `options`
    /// request it.
    pub fn new(
        items: Vec<T>,
        per_page: u64,
        current_page: Option<Value>,
        options: PaginatorOptions,
        resolver: &dyn ParamResolver,
    ) -> Self {
        let base = SimplePaginator::new(items, per_page, current_page, &options, resolver);

        let let_name = options
            .let_name
            .unwrap_or_else(|| DEFAULT_LET_NAME.to_string());
        let per_page_name = options
            .per_page_name
            .unwrap_or_else(|| DEFAULT_PER_PAGE_NAME.to_string());

        let current_let = options.current_let.map(|raw| {
            normalize_let(&let_name, Some(&raw), || resolver.current_let(&let_name))
        });

        Self {
            base,
            current_let,
            let_name,
            per_page_name,
        }
    }

    /// Get the URL for a given page number
    ///
    /// Pages below 1 link to page 1. The current per-page size is always
    /// included and wins over an extra query entry with the same key. The
    /// let value is not added; put it in the options query to keep it.
    pub fn url(&self, page: i64) -> String {
        self.base.build_url(vec![
            (
                self.base.page_name().to_string(),
                clamp_page(page).to_string(),
            ),
            (self.per_page_name.clone(), self.base.per_page().to_string()),
        ])
    }

    /// Get the URL for the next page, if more items follow
    pub fn next_page_url(&self) -> Option<String> {
        self.base.next_page().map(|page| self.url(page))
    }

    /// Get the URL for the previous page, if this is not the first page
    pub fn previous_page_url(&self) -> Option<String> {
        (self.current_page() > 1).then(|| self.url(self.current_page() as i64 - 1))
    }

    /// The normalized let value, or `None` when let was not requested
    pub fn current_let(&self) -> Option<u64> {
        self.current_let
    }

    /// Build the structured summary served by API responses
    pub fn to_array(&self) -> PageSummary<'_, T> {
        PageSummary {
            current_page: self.current_page(),
            current_let: self.current_let(),
            data: self.items(),
            first_page_url: self.url(1),
            from: self.first_item(),
            next_page_url: self.next_page_url(),
            path: self.path(),
            per_page: self.per_page(),
            prev_page_url: self.previous_page_url(),
            to: self.last_item(),
        }
    }

    pub fn base(&self) -> &SimplePaginator<T> {
        &self.base
    }

    pub fn into_items(self) -> Vec<T> {
        self.base.into_items()
    }

    pub fn items(&self) -> &[T] {
        self.base.items()
    }

    pub fn count(&self) -> usize {
        self.base.count()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn first_item(&self) -> Option<u64> {
        self.base.first_item()
    }

    pub fn last_item(&self) -> Option<u64> {
        self.base.last_item()
    }

    pub fn has_more_pages(&self) -> bool {
        self.base.has_more_pages()
    }

    pub fn on_first_page(&self) -> bool {
        self.base.on_first_page()
    }

    pub fn has_pages(&self) -> bool {
        self.base.has_pages()
    }

    pub fn per_page(&self) -> u64 {
        self.base.per_page()
    }

    pub fn current_page(&self) -> u64 {
        self.base.current_page()
    }

    pub fn path(&self) -> &str {
        self.base.path()
    }

    pub fn query(&self) -> &QueryMap {
        self.base.query()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.base.fragment()
    }

    pub fn page_name(&self) -> &str {
        self.base.page_name()
    }

    pub fn let_name(&self) -> &str {
        &self.let_name
    }

    pub fn per_page_name(&self) -> &str {
        &self.per_page_name
    }
}

impl<T: Serialize> Paginator<T> {
    /// Encode the summary as a JSON value
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_array())?)
    }

    /// Encode the summary as an indented JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_array())?)
    }
}

impl<T: Serialize> Serialize for Paginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
