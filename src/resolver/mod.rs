//! Parameter resolvers
//!
//! Resolvers are the only link between a paginator and the request being
//! served. They are injected wherever paginators are built:
//!
//! - [`NoResolver`] - always returns the defaults
//! - [`FnResolvers`] - closures registered once at startup
//! - [`QueryResolver`] - reads the current request's query string

mod query;
mod types;

pub use query::QueryResolver;
pub use types::{FnResolvers, NoResolver, ParamResolver};

#[cfg(test)]
mod tests;
