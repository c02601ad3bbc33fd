// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # eframe-pagination
//!
//! Pagination state for web APIs: current page, per-page limit and a
//! secondary "let" offset, rendered into navigation URLs and a serializable
//! page summary.
//!
//! ## Features
//!
//! - **Never fails**: malformed page, let and limit input falls back to defaults
//! - **Stable links**: every generated URL re-asserts the current page size
//! - **Injected resolvers**: request parameters come from a resolver passed in,
//!   not from global state
//! - **Wire-compatible summary**: `current_page`, `current_let`, `data`,
//!   `first_page_url`, `from`, `next_page_url`, `path`, `per_page`,
//!   `prev_page_url`, `to`
//!
//! ## Quick Start
//!
//! ```rust
//! use eframe_pagination::{Paginator, PaginatorOptions, QueryResolver};
//!
//! let request = QueryResolver::parse("/posts?page=2&let=4");
//! let paginator = Paginator::new(
//!     vec!["c", "d"],
//!     2,
//!     None,
//!     PaginatorOptions::new()
//!         .with_path("/posts")
//!         .with_has_more(true)
//!         .with_resolved_let(),
//!     &request,
//! );
//!
//! assert_eq!(paginator.current_page(), 2);
//! assert_eq!(paginator.current_let(), Some(4));
//! assert_eq!(paginator.next_page_url().as_deref(), Some("/posts?page=3&limit=2"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    PaginatorFactory                      │
//! │        PaginationConfig  +  Arc<dyn ParamResolver>       │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ make()
//! ┌────────────────────────────┴─────────────────────────────┐
//! │ Paginator<T>   current_let · let_name · per_page_name    │
//! │   └── SimplePaginator<T>   items · page · path · query   │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ url() · to_array()
//!                     links + PageSummary (JSON)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and parameter name defaults
pub mod types;

/// Paginators, options and page summaries
pub mod pagination;

/// Request parameter resolvers
pub mod resolver;

/// Paginator construction with injected config and resolvers
pub mod factory;

/// Pagination settings and loader
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, PaginationConfig};
pub use error::{Error, Result};
pub use factory::PaginatorFactory;
pub use pagination::{PageSummary, Paginator, PaginatorOptions, SimplePaginator};
pub use resolver::{FnResolvers, NoResolver, ParamResolver, QueryResolver};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
