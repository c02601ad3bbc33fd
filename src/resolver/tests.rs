//! Tests for resolver module

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use test_case::test_case;
use url::Url;

// ============================================================================
// Default Resolver Tests
// ============================================================================

#[test]
fn test_no_resolver_defaults() {
    let resolver = NoResolver;
    assert_eq!(resolver.current_page("page"), 1);
    assert_eq!(resolver.current_let("let"), 0);
    assert_eq!(resolver.current_limit("limit"), None);
    assert_eq!(resolver.current_path(), None);
}

#[test]
fn test_empty_fn_resolvers_use_defaults() {
    let resolver = FnResolvers::new();
    assert_eq!(resolver.current_page("page"), 1);
    assert_eq!(resolver.current_let("let"), 0);
    assert_eq!(resolver.current_limit("limit"), None);
    assert_eq!(resolver.current_path(), None);
}

#[test]
fn test_fn_resolvers_receive_parameter_name() {
    let resolver = FnResolvers::new()
        .with_page_resolver(|name| name.len() as u64)
        .with_let_resolver(|name| if name == "offset" { 3 } else { 0 })
        .with_limit_resolver(|name| (name == "size").then_some(40))
        .with_path_resolver(|| Some("/api/items".to_string()));

    assert_eq!(resolver.current_page("pg"), 2);
    assert_eq!(resolver.current_let("offset"), 3);
    assert_eq!(resolver.current_let("let"), 0);
    assert_eq!(resolver.current_limit("size"), Some(40));
    assert_eq!(resolver.current_limit("limit"), None);
    assert_eq!(resolver.current_path(), Some("/api/items".to_string()));
}

#[test]
fn test_fn_resolvers_shared_across_clones() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let resolver = FnResolvers::new().with_page_resolver(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        2
    });

    let copy = resolver.clone();
    assert_eq!(resolver.current_page("page"), 2);
    assert_eq!(copy.current_page("page"), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_fn_resolvers_debug() {
    let resolver = FnResolvers::new().with_limit_resolver(|_| None);
    let debug = format!("{resolver:?}");
    assert!(debug.contains("limit: true"));
    assert!(debug.contains("page: false"));
}

#[test]
fn test_arc_resolver() {
    let resolver: Arc<dyn ParamResolver> = Arc::new(QueryResolver::parse("page=4"));
    assert_eq!(resolver.current_page("page"), 4);

    let shared = Arc::new(QueryResolver::parse("limit=9"));
    assert_eq!(ParamResolver::current_limit(&shared, "limit"), Some(9));
}

// ============================================================================
// QueryResolver Tests
// ============================================================================

#[test_case("page=3" => 3 ; "valid")]
#[test_case("page=0" => 1 ; "zero")]
#[test_case("page=-2" => 1 ; "negative")]
#[test_case("page=2.5" => 1 ; "fractional")]
#[test_case("page=abc" => 1 ; "non numeric")]
#[test_case("page=" => 1 ; "empty")]
#[test_case("other=5" => 1 ; "absent")]
#[test_case("page=1&page=6" => 6 ; "last value wins")]
fn test_query_current_page(query: &str) -> u64 {
    QueryResolver::parse(query).current_page("page")
}

#[test_case("let=4" => 4 ; "valid")]
#[test_case("let=0" => 0 ; "zero")]
#[test_case("let=-1" => 0 ; "negative")]
#[test_case("let=x" => 0 ; "non numeric")]
#[test_case("" => 0 ; "absent")]
fn test_query_current_let(query: &str) -> u64 {
    QueryResolver::parse(query).current_let("let")
}

#[test_case("limit=25" => Some(25) ; "valid")]
#[test_case("limit=0" => Some(0) ; "zero")]
#[test_case("limit=-1" => None ; "negative")]
#[test_case("limit=all" => None ; "non numeric")]
#[test_case("" => None ; "absent")]
fn test_query_current_limit(query: &str) -> Option<u64> {
    QueryResolver::parse(query).current_limit("limit")
}

#[test]
fn test_parse_request_target() {
    let resolver = QueryResolver::parse("/posts?page=2&q=hello+world#top");
    assert_eq!(resolver.current_path(), Some("/posts".to_string()));
    assert_eq!(resolver.input("q"), Some("hello world"));
    assert_eq!(resolver.current_page("page"), 2);
}

#[test]
fn test_parse_path_only() {
    let resolver = QueryResolver::parse("/posts");
    assert_eq!(resolver.current_path(), Some("/posts".to_string()));
    assert_eq!(resolver.input("page"), None);
}

#[test]
fn test_parse_bare_query() {
    let resolver = QueryResolver::parse("?page=5");
    assert_eq!(resolver.current_path(), None);
    assert_eq!(resolver.current_page("page"), 5);

    let resolver = QueryResolver::parse("page=6");
    assert_eq!(resolver.current_path(), None);
    assert_eq!(resolver.current_page("page"), 6);
}

#[test]
fn test_from_url() {
    let url = Url::parse("https://example.com/api/users?page=3&limit=10#frag").unwrap();
    let resolver = QueryResolver::from_url(&url);

    assert_eq!(
        resolver.current_path(),
        Some("https://example.com/api/users".to_string())
    );
    assert_eq!(resolver.current_page("page"), 3);
    assert_eq!(resolver.current_limit("limit"), Some(10));
}

#[test]
fn test_from_pairs_with_path() {
    let resolver = QueryResolver::from_pairs([("p", "2"), ("let", "5")]).with_path("/feed");
    assert_eq!(resolver.current_page("p"), 2);
    assert_eq!(resolver.current_let("let"), 5);
    assert_eq!(resolver.current_path(), Some("/feed".to_string()));
}
