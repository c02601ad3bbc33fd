//! Paginator factory
//!
//! Holds the application's pagination settings and the resolver for the
//! request being served, and builds paginators from both.

use crate::config::PaginationConfig;
use crate::pagination::{Paginator, PaginatorOptions};
use crate::resolver::{NoResolver, ParamResolver};
use std::sync::Arc;
use tracing::warn;

/// Builds paginators with injected configuration and resolvers
#[derive(Clone)]
pub struct PaginatorFactory {
    config: PaginationConfig,
    resolver: Arc<dyn ParamResolver>,
}

impl std::fmt::Debug for PaginatorFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatorFactory")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for PaginatorFactory {
    fn default() -> Self {
        Self::new(PaginationConfig::default(), Arc::new(NoResolver))
    }
}

impl PaginatorFactory {
    /// Create a factory
    pub fn new(config: PaginationConfig, resolver: Arc<dyn ParamResolver>) -> Self {
        Self { config, resolver }
    }

    /// Same configuration, different resolver (typically one per request)
    #[must_use]
    pub fn for_request(&self, resolver: Arc<dyn ParamResolver>) -> Self {
        Self {
            config: self.config.clone(),
            resolver,
        }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn resolver(&self) -> &dyn ParamResolver {
        self.resolver.as_ref()
    }

    /// Page size for the current request
    ///
    /// The requested limit if any, else the configured default, capped at
    /// `max_per_page`.
    pub fn resolve_per_page(&self) -> u64 {
        self.resolve_per_page_for(&self.config.per_page_name)
    }

    fn resolve_per_page_for(&self, per_page_name: &str) -> u64 {
        let requested = self
            .resolver
            .current_limit(per_page_name)
            .unwrap_or(self.config.default_per_page);

        match self.config.max_per_page {
            Some(max) if requested > max => {
                warn!(
                    param = per_page_name,
                    requested, max, "Requested page size exceeds maximum, capping"
                );
                max
            }
            _ => requested,
        }
    }

    /// Options pre-filled from the configuration and the request path
    pub fn options(&self) -> PaginatorOptions {
        self.fill_options(PaginatorOptions::new())
    }

    fn fill_options(&self, mut options: PaginatorOptions) -> PaginatorOptions {
        if options.page_name.is_none() {
            options.page_name = Some(self.config.page_name.clone());
        }
        if options.let_name.is_none() {
            options.let_name = Some(self.config.let_name.clone());
        }
        if options.per_page_name.is_none() {
            options.per_page_name = Some(self.config.per_page_name.clone());
        }
        if options.path.is_none() {
            options.path = self.resolver.current_path();
        }
        if self.config.with_let && options.current_let.is_none() {
            options = options.with_resolved_let();
        }
        options
    }

    /// Build a paginator for the current request
    pub fn make<T>(&self, items: Vec<T>) -> Paginator<T> {
        self.make_with(items, PaginatorOptions::new())
    }

    /// Build a paginator, letting `options` override configured values
    pub fn make_with<T>(&self, items: Vec<T>, options: PaginatorOptions) -> Paginator<T> {
        let options = self.fill_options(options);
        let per_page = self.resolve_per_page_for(
            options
                .per_page_name
                .as_deref()
                .unwrap_or(&self.config.per_page_name),
        );

        Paginator::new(items, per_page, None, options, self.resolver.as_ref())
    }
}
