//! Pagination module
//!
//! Supports: page number, per-page limit, secondary let offset
//!
//! # Overview
//!
//! [`SimplePaginator`] is the base page-number primitive. [`Paginator`]
//! embeds it and adds the let offset and the per-page parameter that every
//! generated link carries. Both are built from an already-sliced page of
//! items and never fail: invalid page and let input falls back to defaults.

mod paginator;
mod params;
mod simple;
mod types;

pub use paginator::Paginator;
pub use params::{filter_int, int_value, is_falsy};
pub use simple::SimplePaginator;
pub use types::{PageSummary, PaginatorOptions};
