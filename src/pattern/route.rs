//! Path nodes, query nodes and the Route that holds them

use super::escape;
use super::parameter::Parameter;
use crate::components::RouteComponents;
use crate::matching::{self, MatchResult};
use crate::parsing::{self, ParseError};
use crate::printing::{self, RenderError, Value};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A node of the path part of a route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PathPattern {
    /// Matches one component by exact equality
    Literal(String),
    /// Matches one component accepted by the parameter's type
    Param(Parameter),
    /// Matches either sub-route
    Alternation(Vec<PathPattern>, Vec<PathPattern>),
    /// A sub-route that may be absent
    Optional(Vec<PathPattern>),
    /// A run of one or more components
    Wildcard,
}

impl PathPattern {
    pub fn literal(text: impl Into<String>) -> Self {
        PathPattern::Literal(text.into())
    }

    pub fn param(parameter: Parameter) -> Self {
        PathPattern::Param(parameter)
    }

    pub fn alternation(left: Vec<PathPattern>, right: Vec<PathPattern>) -> Self {
        PathPattern::Alternation(left, right)
    }

    pub fn optional(route: Vec<PathPattern>) -> Self {
        PathPattern::Optional(route)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, PathPattern::Wildcard)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Literal(text) => f.write_str(&escape(text)),
            PathPattern::Param(parameter) => match parameter.kind() {
                Some(kind) => write!(f, ":{}({})", kind, escape(parameter.name())),
                None => write!(f, ":{}", escape(parameter.name())),
            },
            PathPattern::Alternation(left, right) => {
                write!(f, "({}|{})", join_path(left), join_path(right))
            }
            PathPattern::Optional(route) => write!(f, "({})", join_path(route)),
            PathPattern::Wildcard => f.write_str("*"),
        }
    }
}

/// A node of the query part of a route
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QueryPattern {
    Required(Parameter),
    Optional(Parameter),
    Alternation(Parameter, Parameter),
}

impl QueryPattern {
    /// Parameters referenced by this node, in declaration order
    pub fn parameters(&self) -> Vec<&Parameter> {
        match self {
            QueryPattern::Required(parameter) | QueryPattern::Optional(parameter) => {
                vec![parameter]
            }
            QueryPattern::Alternation(first, second) => vec![first, second],
        }
    }
}

fn query_parameter(parameter: &Parameter) -> String {
    match parameter.kind() {
        Some(kind) => format!("{}=:{}", escape(parameter.name()), kind),
        None => format!(":{}", escape(parameter.name())),
    }
}

impl fmt::Display for QueryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryPattern::Required(parameter) => f.write_str(&query_parameter(parameter)),
            QueryPattern::Optional(parameter) => write!(f, "({})", query_parameter(parameter)),
            QueryPattern::Alternation(first, second) => write!(
                f,
                "({}|{})",
                query_parameter(first),
                query_parameter(second)
            ),
        }
    }
}

pub(crate) fn join_path(nodes: &[PathPattern]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Drop empty literals, recursing into sub-routes
///
/// Groups emptied this way are rewritten so the canonical text still parses:
/// an alternation with one empty branch becomes an optional group of the
/// other, and empty groups disappear.
fn without_empty_literals(nodes: Vec<PathPattern>) -> Vec<PathPattern> {
    nodes
        .into_iter()
        .filter_map(|node| match node {
            PathPattern::Literal(text) if text.is_empty() => None,
            PathPattern::Alternation(left, right) => {
                let left = without_empty_literals(left);
                let right = without_empty_literals(right);
                match (left.is_empty(), right.is_empty()) {
                    (true, true) => None,
                    (true, false) => Some(PathPattern::Optional(right)),
                    (false, true) => Some(PathPattern::Optional(left)),
                    (false, false) => Some(PathPattern::Alternation(left, right)),
                }
            }
            PathPattern::Optional(route) => {
                let route = without_empty_literals(route);
                (!route.is_empty()).then_some(PathPattern::Optional(route))
            }
            other => Some(other),
        })
        .collect()
}

/// The compiled form of a route template
///
/// Equality and hashing go through the canonical text, which is what
/// registries key routes by.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Route {
    path: Vec<PathPattern>,
    query: Vec<QueryPattern>,
}

impl Route {
    pub fn new(path: Vec<PathPattern>, query: Vec<QueryPattern>) -> Self {
        Self {
            path: without_empty_literals(path),
            query,
        }
    }

    /// Compile a template string
    pub fn parse(template: &str) -> Result<Self, ParseError> {
        parsing::parse_template(template)
    }

    pub fn path(&self) -> &[PathPattern] {
        &self.path
    }

    pub fn query(&self) -> &[QueryPattern] {
        &self.query
    }

    /// Canonical template text
    pub fn template(&self) -> String {
        self.to_string()
    }

    /// Named parameters in declaration order, path first
    pub fn parameters(&self) -> Vec<&Parameter> {
        fn collect<'a>(nodes: &'a [PathPattern], out: &mut Vec<&'a Parameter>) {
            for node in nodes {
                match node {
                    PathPattern::Param(parameter) if !parameter.is_anonymous() => {
                        out.push(parameter)
                    }
                    PathPattern::Alternation(left, right) => {
                        collect(left, out);
                        collect(right, out);
                    }
                    PathPattern::Optional(route) => collect(route, out),
                    _ => {}
                }
            }
        }

        let mut parameters = Vec::new();
        collect(&self.path, &mut parameters);
        parameters.extend(self.query.iter().flat_map(QueryPattern::parameters));
        parameters
    }

    /// Match decomposed URL components against this route
    pub fn matches(&self, components: &RouteComponents) -> MatchResult {
        matching::match_route(self, components)
    }

    /// Render URL components from a value payload
    pub fn render(&self, values: &[Value]) -> Result<RouteComponents, RenderError> {
        printing::render(self, values)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_path(&self.path))?;
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join("&");
            write!(f, "?{}", query)?;
        }
        Ok(())
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl FromStr for Route {
    type Err = ParseError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        Route::parse(template)
    }
}
