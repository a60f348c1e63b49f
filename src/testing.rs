//! Assertion helpers for route tests
//!
//! Shared by the unit tests and the integration tests under `tests/`:
//!
//! ```text
//! let route = route("recipe/:int(id)");
//! assert_match(&route, "app://recipe/42", &[(Parameter::int("id"), "42")]);
//! assert_no_match(&route, "app://recipe/abc");
//! ```

use crate::components::RouteComponents;
use crate::matching::{Bindings, MatchResult};
use crate::pattern::{Parameter, Route};

/// Parse a template, panicking with the parse error
pub fn route(template: &str) -> Route {
    Route::parse(template)
        .unwrap_or_else(|error| panic!("template `{}` should parse: {}", template, error))
}

/// Decompose a URL string, panicking if it is invalid
pub fn components(url: &str) -> RouteComponents {
    RouteComponents::parse(url).unwrap_or_else(|error| panic!("{}", error))
}

/// Build expected bindings
pub fn bindings(pairs: &[(Parameter, &str)]) -> Bindings {
    pairs
        .iter()
        .map(|(parameter, value)| (parameter.clone(), value.to_string()))
        .collect()
}

/// Assert that `url` matches with exactly the expected bindings
pub fn assert_match(route: &Route, url: &str, expected: &[(Parameter, &str)]) -> MatchResult {
    let result = route.matches(&components(url));
    assert!(
        result.is_match(),
        "expected `{}` to match `{}`",
        route,
        url
    );
    assert_eq!(
        result.params(),
        &bindings(expected),
        "bindings of `{}` against `{}`",
        route,
        url
    );
    result
}

/// Assert that `url` does not match
pub fn assert_no_match(route: &Route, url: &str) {
    let result = route.matches(&components(url));
    assert!(
        !result.is_match(),
        "expected `{}` not to match `{}`, got {:?}",
        route,
        url,
        result.params()
    );
    assert!(result.params().is_empty());
}
