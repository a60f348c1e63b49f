//! Matcher: route AST against decomposed URL components
//!
//! Path nodes are matched left to right with limited backtracking:
//!
//! - alternation tries the branch with more nodes first, left first on ties
//! - an optional group that does not match consumes nothing
//! - a trailing wildcard takes all remaining components (at least one)
//! - an embedded wildcard takes at least one component and stops at the
//!   first position where the single next node matches
//!
//! Query nodes are matched afterwards against the query pairs, each pair
//! satisfying at most one node. There is no step budget: cost grows with
//! alternation nesting depth times path length.

mod path;
mod query;
mod result;

pub use result::{Bindings, MatchResult};

use crate::components::RouteComponents;
use crate::pattern::Route;

/// Match URL components against a route
///
/// The first path component is the host. Empty components and stray `/`
/// are ignored.
pub fn match_route(route: &Route, components: &RouteComponents) -> MatchResult {
    let path: Vec<&str> = components
        .path
        .iter()
        .map(String::as_str)
        .filter(|component| !component.is_empty() && *component != "/")
        .collect();

    let Some(mut bindings) = path::match_path(route.path(), &path) else {
        tracing::trace!(route = %route, "path did not match");
        return MatchResult::no_match();
    };

    let Some(query) = query::match_query(route.query(), &components.query) else {
        tracing::trace!(route = %route, "query did not match");
        return MatchResult::no_match();
    };

    bindings.extend(query);
    tracing::trace!(route = %route, bindings = bindings.len(), "route matched");
    MatchResult::matched(bindings)
}
