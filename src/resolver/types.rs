//! Resolver trait and closure-backed resolvers

use std::fmt;
use std::sync::Arc;

/// Source of request-derived pagination parameters
///
/// Each method receives the query parameter name in use and returns an
/// already validated value. The default methods return the values used when
/// nothing is registered: page 1, let 0, no limit, no path.
pub trait ParamResolver: Send + Sync {
    /// Current page, >= 1
    fn current_page(&self, _page_name: &str) -> u64 {
        1
    }

    /// Current let offset
    fn current_let(&self, _let_name: &str) -> u64 {
        0
    }

    /// Requested per-page size, if any
    fn current_limit(&self, _limit_name: &str) -> Option<u64> {
        None
    }

    /// Request path used as the base of generated URLs
    fn current_path(&self) -> Option<String> {
        None
    }
}

/// Resolver that always returns the defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl ParamResolver for NoResolver {}

type CountFn = Arc<dyn Fn(&str) -> u64 + Send + Sync>;
type LimitFn = Arc<dyn Fn(&str) -> Option<u64> + Send + Sync>;
type PathFn = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Resolver assembled from closures registered once at startup
///
/// Hooks that are not registered fall back to the trait defaults.
#[derive(Clone, Default)]
pub struct FnResolvers {
    page: Option<CountFn>,
    current_let: Option<CountFn>,
    limit: Option<LimitFn>,
    path: Option<PathFn>,
}

impl FnResolvers {
    /// Create an empty set of resolvers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the page resolver
    #[must_use]
    pub fn with_page_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> u64 + Send + Sync + 'static,
    {
        self.page = Some(Arc::new(f));
        self
    }

    /// Register the let resolver
    #[must_use]
    pub fn with_let_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> u64 + Send + Sync + 'static,
    {
        self.current_let = Some(Arc::new(f));
        self
    }

    /// Register the limit resolver
    #[must_use]
    pub fn with_limit_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<u64> + Send + Sync + 'static,
    {
        self.limit = Some(Arc::new(f));
        self
    }

    /// Register the path resolver
    #[must_use]
    pub fn with_path_resolver<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.path = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for FnResolvers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolvers")
            .field("page", &self.page.is_some())
            .field("current_let", &self.current_let.is_some())
            .field("limit", &self.limit.is_some())
            .field("path", &self.path.is_some())
            .finish()
    }
}

impl ParamResolver for FnResolvers {
    fn current_page(&self, page_name: &str) -> u64 {
        self.page.as_ref().map_or(1, |f| f(page_name))
    }

    fn current_let(&self, let_name: &str) -> u64 {
        self.current_let.as_ref().map_or(0, |f| f(let_name))
    }

    fn current_limit(&self, limit_name: &str) -> Option<u64> {
        self.limit.as_ref().and_then(|f| f(limit_name))
    }

    fn current_path(&self) -> Option<String> {
        self.path.as_ref().and_then(|f| f())
    }
}

impl<R: ParamResolver + ?Sized> ParamResolver for Arc<R> {
    fn current_page(&self, page_name: &str) -> u64 {
        (**self).current_page(page_name)
    }

    fn current_let(&self, let_name: &str) -> u64 {
        (**self).current_let(let_name)
    }

    fn current_limit(&self, limit_name: &str) -> Option<u64> {
        (**self).current_limit(limit_name)
    }

    fn current_path(&self) -> Option<String> {
        (**self).current_path()
    }
}
