//! Request-bound resolver
//!
//! Reads pagination parameters from a request URL's query string.

use super::types::ParamResolver;
use crate::pagination::filter_int;
use std::collections::HashMap;
use url::{form_urlencoded, Url};

/// Resolver over one request's path and query parameters
///
/// Validation rules:
/// - page: integer >= 1, otherwise 1
/// - let: integer >= 1, otherwise 0
/// - limit: integer >= 0, otherwise none
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResolver {
    path: Option<String>,
    params: HashMap<String, String>,
}

impl QueryResolver {
    /// Create a resolver with no path and no parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a relative request target or a bare query string
    ///
    /// `/posts?page=2` yields path `/posts`; `page=2` yields no path; a
    /// string starting with `/` and without `?` is taken as a path.
    pub fn parse(target: &str) -> Self {
        let target = target.split('#').next().unwrap_or_default();

        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (Some(path), query),
            None if target.starts_with('/') => (Some(target), ""),
            None => (None, target),
        };

        Self {
            path: path.filter(|p| !p.is_empty()).map(str::to_string),
            params: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Build a resolver from an absolute URL
    ///
    /// The path is the URL without its query and fragment.
    pub fn from_url(url: &Url) -> Self {
        let mut base = url.clone();
        base.set_query(None);
        base.set_fragment(None);

        Self {
            path: Some(base.to_string()),
            params: url.query_pairs().into_owned().collect(),
        }
    }

    /// Build a resolver from key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: None,
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set the request path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Raw request input for a parameter
    pub fn input(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn int_input(&self, name: &str) -> Option<i64> {
        self.input(name).and_then(filter_int)
    }
}

impl ParamResolver for QueryResolver {
    fn current_page(&self, page_name: &str) -> u64 {
        match self.int_input(page_name) {
            Some(page) if page >= 1 => page as u64,
            _ => 1,
        }
    }

    fn current_let(&self, let_name: &str) -> u64 {
        match self.int_input(let_name) {
            Some(current_let) if current_let >= 1 => current_let as u64,
            _ => 0,
        }
    }

    fn current_limit(&self, limit_name: &str) -> Option<u64> {
        match self.int_input(limit_name) {
            Some(limit) if limit >= 0 => Some(limit as u64),
            _ => None,
        }
    }

    fn current_path(&self) -> Option<String> {
        self.path.clone()
    }
}
