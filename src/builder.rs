//! Typed route builder
//!
//! Programmatic alternative to template strings. Builder expressions produce
//! the same AST the parser produces for the equivalent template:
//!
//! ```text
//! lit("recipe") / int("recipeId") / maybe(lit("details"))
//!     == "recipe/:int(recipeId)/(details)"
//! (lit("recipe") | lit("recipes") / lit("archive")) / param("id")
//!     == "(recipe|recipes/archive)/:id"
//! lit("recipe").query(required(Parameter::int("recipeId")) & optional(Parameter::int("menuId")))
//!     == "recipe?recipeId=:int&(menuId=:int)"
//! ```
//!
//! `|` is left-associative, so the parser's right-nested `a|b|c` is written
//! `a | (b | c)`.
//!
//! Composition never fails; [`Segments::build`] and [`RouteBuilder::build`]
//! check the shape and refuse routes no template could express.

use crate::pattern::{ParamType, Parameter, PathPattern, QueryPattern, Route};
use std::ops::{BitAnd, BitOr, Div};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("alternation `{route}` has an empty branch")]
    EmptyAlternative { route: String },

    #[error("optional group `{route}` is empty")]
    EmptyOptional { route: String },

    #[error("query parameters need a name (in `{item}`)")]
    AnonymousQueryParameter { item: String },
}

/// A sequence of path nodes under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segments(Vec<PathPattern>);

impl Segments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[PathPattern] {
        &self.0
    }

    /// Concatenate, same as `/`
    pub fn then(self, other: impl Into<Segments>) -> Self {
        self / other
    }

    /// Alternate, same as `|`
    pub fn or(self, other: impl Into<Segments>) -> Self {
        self | other
    }

    /// Attach query items
    pub fn query(self, items: impl Into<QueryItems>) -> RouteBuilder {
        RouteBuilder {
            path: self,
            query: items.into(),
        }
    }

    pub fn build(self) -> Result<Route, BuildError> {
        self.query(QueryItems::default()).build()
    }
}

impl From<&str> for Segments {
    fn from(text: &str) -> Self {
        lit(text)
    }
}

impl From<Parameter> for Segments {
    fn from(parameter: Parameter) -> Self {
        Segments(vec![PathPattern::Param(parameter)])
    }
}

impl From<PathPattern> for Segments {
    fn from(node: PathPattern) -> Self {
        Segments(vec![node])
    }
}

impl<T: Into<Segments>> Div<T> for Segments {
    type Output = Segments;

    fn div(mut self, rhs: T) -> Segments {
        self.0.extend(rhs.into().0);
        self
    }
}

impl<T: Into<Segments>> BitOr<T> for Segments {
    type Output = Segments;

    fn bitor(self, rhs: T) -> Segments {
        Segments(vec![PathPattern::Alternation(self.0, rhs.into().0)])
    }
}

/// Literal component
pub fn lit(text: impl Into<String>) -> Segments {
    Segments(vec![PathPattern::Literal(text.into())])
}

/// Untyped parameter
pub fn param(name: impl Into<String>) -> Segments {
    Parameter::untyped(name).into()
}

pub fn typed(kind: ParamType, name: impl Into<String>) -> Segments {
    Parameter::typed(kind, name).into()
}

pub fn int(name: impl Into<String>) -> Segments {
    typed(ParamType::Int, name)
}

pub fn double(name: impl Into<String>) -> Segments {
    typed(ParamType::Double, name)
}

pub fn boolean(name: impl Into<String>) -> Segments {
    typed(ParamType::Bool, name)
}

pub fn string(name: impl Into<String>) -> Segments {
    typed(ParamType::String, name)
}

pub fn wildcard() -> Segments {
    Segments(vec![PathPattern::Wildcard])
}

/// Optional group
pub fn maybe(inner: impl Into<Segments>) -> Segments {
    Segments(vec![PathPattern::Optional(inner.into().0)])
}

/// Query items under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryItems(Vec<QueryPattern>);

impl From<Parameter> for QueryItems {
    fn from(parameter: Parameter) -> Self {
        required(parameter)
    }
}

impl From<QueryPattern> for QueryItems {
    fn from(item: QueryPattern) -> Self {
        QueryItems(vec![item])
    }
}

impl<T: Into<QueryItems>> BitAnd<T> for QueryItems {
    type Output = QueryItems;

    fn bitand(mut self, rhs: T) -> QueryItems {
        self.0.extend(rhs.into().0);
        self
    }
}

pub fn required(parameter: Parameter) -> QueryItems {
    QueryPattern::Required(parameter).into()
}

pub fn optional(parameter: Parameter) -> QueryItems {
    QueryPattern::Optional(parameter).into()
}

pub fn one_of(first: Parameter, second: Parameter) -> QueryItems {
    QueryPattern::Alternation(first, second).into()
}

/// Path plus query, ready to be checked and built
#[derive(Debug, Clone, PartialEq)]
pub struct RouteBuilder {
    path: Segments,
    query: QueryItems,
}

impl RouteBuilder {
    /// Add more query items
    pub fn and(mut self, items: impl Into<QueryItems>) -> Self {
        self.query = self.query & items;
        self
    }

    /// Check the shape and produce the route
    pub fn build(self) -> Result<Route, BuildError> {
        check_path(&self.path.0)?;
        let route = Route::new(self.path.0, self.query.0);
        for item in route.query() {
            if item.parameters().iter().any(|p| p.is_anonymous()) {
                return Err(BuildError::AnonymousQueryParameter {
                    item: item.to_string(),
                });
            }
        }
        Ok(route)
    }
}

/// Nodes that print as nothing
fn is_blank(nodes: &[PathPattern]) -> bool {
    nodes
        .iter()
        .all(|node| matches!(node, PathPattern::Literal(text) if text.is_empty()))
}

fn check_path(nodes: &[PathPattern]) -> Result<(), BuildError> {
    for node in nodes {
        match node {
            PathPattern::Alternation(left, right) => {
                if is_blank(left) || is_blank(right) {
                    return Err(BuildError::EmptyAlternative {
                        route: node.to_string(),
                    });
                }
                check_path(left)?;
                check_path(right)?;
            }
            PathPattern::Optional(inner) => {
                if is_blank(inner) {
                    return Err(BuildError::EmptyOptional {
                        route: node.to_string(),
                    });
                }
                check_path(inner)?;
            }
            _ => {}
        }
    }
    Ok(())
}
