//! Simple page-number paginator
//!
//! The base paging primitive: a current page, its items, and whether more
//! pages follow. It does not know the total number of items, so it can only
//! link to the previous and next page.

use super::params::normalize_page;
use super::types::PaginatorOptions;
use crate::resolver::ParamResolver;
use crate::types::{QueryMap, DEFAULT_PAGE_NAME, DEFAULT_PATH};
use serde_json::Value;
use url::form_urlencoded;

/// Page-number paginator over an already-materialized slice
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePaginator<T> {
    items: Vec<T>,
    per_page: u64,
    current_page: u64,
    path: String,
    query: QueryMap,
    fragment: Option<String>,
    page_name: String,
    has_more: bool,
}

impl<T> SimplePaginator<T> {
    /// Create a new paginator
    ///
    /// A missing or falsy `current_page` is resolved through `resolver`.
    /// Anything that is not an integer >= 1 becomes page 1.
    pub fn new(
        items: Vec<T>,
        per_page: u64,
        current_page: Option<Value>,
        options: &PaginatorOptions,
        resolver: &dyn ParamResolver,
    ) -> Self {
        let page_name = options
            .page_name
            .clone()
            .unwrap_or_else(|| DEFAULT_PAGE_NAME.to_string());

        let current_page = normalize_page(&page_name, current_page.as_ref(), || {
            resolver.current_page(&page_name)
        });

        Self {
            items,
            per_page,
            current_page,
            path: normalize_path(options.path.as_deref().unwrap_or(DEFAULT_PATH)),
            query: options.query.clone(),
            fragment: options.fragment.clone().filter(|f| !f.is_empty()),
            page_name,
            has_more: options.has_more,
        }
    }

    /// Get the URL for a given page number
    pub fn url(&self, page: i64) -> String {
        self.build_url(vec![(self.page_name.clone(), clamp_page(page).to_string())])
    }

    /// Build a URL from the base path, the extra query and `params`
    ///
    /// `params` override extra query entries with the same key.
    pub fn build_url(&self, params: Vec<(String, String)>) -> String {
        let mut pairs: Vec<(String, String)> = self
            .query
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        for (key, value) in params {
            match pairs.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => pairs.push((key, value)),
            }
        }

        let encoded = encode_query(pairs);
        let separator = if self.path.contains('?') { '&' } else { '?' };

        format!("{}{separator}{encoded}{}", self.path, self.build_fragment())
    }

    fn build_fragment(&self) -> String {
        self.fragment
            .as_ref()
            .map(|f| format!("#{f}"))
            .unwrap_or_default()
    }

    /// Get the URL for the previous page
    pub fn previous_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page as i64 - 1))
    }

    /// Get the URL for the next page
    pub fn next_page_url(&self) -> Option<String> {
        self.next_page().map(|page| self.url(page))
    }

    /// The page after this one, if more items follow and it is addressable
    pub(crate) fn next_page(&self) -> Option<i64> {
        if !self.has_more {
            return None;
        }
        i64::try_from(self.current_page).ok()?.checked_add(1)
    }

    /// 1-based index of the first item on this page
    pub fn first_item(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        Some(
            (self.current_page - 1)
                .saturating_mul(self.per_page)
                .saturating_add(1),
        )
    }

    /// 1-based index of the last item on this page
    pub fn last_item(&self) -> Option<u64> {
        self.first_item()
            .map(|first| first.saturating_add(self.items.len() as u64 - 1))
    }

    /// Whether more items exist past this page
    pub fn has_more_pages(&self) -> bool {
        self.has_more
    }

    /// Whether this is the first page
    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether there is more than one page to link between
    pub fn has_pages(&self) -> bool {
        self.current_page != 1 || self.has_more
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryMap {
        &self.query
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn page_name(&self) -> &str {
        &self.page_name
    }
}

/// Page numbers below 1 link to the first page
pub(crate) fn clamp_page(page: i64) -> i64 {
    page.max(1)
}

/// Form-encode query pairs
///
/// `*` is escaped as well, matching RFC 1738 style query strings.
fn encode_query(pairs: Vec<(String, String)>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
        .replace('*', "%2A")
}

/// Strip trailing slashes, keeping a bare `/`
fn normalize_path(path: &str) -> String {
    if path == "/" {
        path.to_string()
    } else {
        path.trim_end_matches('/').to_string()
    }
}
