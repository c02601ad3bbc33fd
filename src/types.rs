//! Common types used throughout eframe-pagination
//!
//! Shared type aliases and the default query parameter names.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Extra query parameters carried on every generated URL
///
/// Ordered so that generated URLs are stable across calls.
pub type QueryMap = BTreeMap<String, String>;

// ============================================================================
// Parameter Names
// ============================================================================

/// Default query parameter for the page number
pub const DEFAULT_PAGE_NAME: &str = "page";

/// Default query parameter for the let offset
pub const DEFAULT_LET_NAME: &str = "let";

/// Default query parameter for the per-page size
pub const DEFAULT_PER_PAGE_NAME: &str = "limit";

/// Default base path for generated URLs
pub const DEFAULT_PATH: &str = "/";

/// Default page size used by the factory when no limit is requested
pub const DEFAULT_PER_PAGE: u64 = 15;
