//! Printer: route plus values to URL components (reverse routing)
//!
//! Values are consumed in declaration order, path nodes first and query
//! nodes after. Literal and wildcard nodes take no value; every other node
//! takes exactly one [`Value`] of the matching shape. Parameter values go
//! through the same validators the matcher uses, so anything rendered here
//! matches the route again with the same bindings.

mod error;
mod values;

pub use error::RenderError;
pub use values::{values_from_json, Branch, ParamValue, Value};

use crate::components::RouteComponents;
use crate::pattern::route::join_path;
use crate::pattern::{Parameter, PathPattern, QueryPattern, Route};
use std::fmt::Display;
use std::slice;

type Cursor<'a> = slice::Iter<'a, Value>;

/// Render URL components for a route
pub fn render(route: &Route, values: &[Value]) -> Result<RouteComponents, RenderError> {
    let mut cursor = values.iter();

    let mut path = Vec::new();
    render_path(route.path(), &mut cursor, &mut path)?;

    let mut query = Vec::new();
    for node in route.query() {
        render_query(node, &mut cursor, &mut query)?;
    }

    ensure_consumed(cursor, || route.to_string())?;
    tracing::trace!(route = %route, components = path.len(), pairs = query.len(), "rendered route");
    Ok(RouteComponents::new(path, query))
}

fn next_value<'a>(
    cursor: &mut Cursor<'a>,
    expected: &dyn Display,
) -> Result<&'a Value, RenderError> {
    cursor.next().ok_or_else(|| RenderError::MissingValue {
        expected: expected.to_string(),
    })
}

fn unexpected(expected: &dyn Display, found: &Value) -> RenderError {
    RenderError::UnexpectedValue {
        expected: expected.to_string(),
        found: found.describe(),
    }
}

fn ensure_consumed(cursor: Cursor<'_>, route: impl FnOnce() -> String) -> Result<(), RenderError> {
    match cursor.len() {
        0 => Ok(()),
        count => Err(RenderError::UnusedValues {
            route: route(),
            count,
        }),
    }
}

/// String form of a parameter value, checked against the parameter's type
fn parameter_text(
    parameter: &Parameter,
    value: &Value,
    expected: &dyn Display,
) -> Result<String, RenderError> {
    let Value::Param(value) = value else {
        return Err(unexpected(expected, value));
    };
    let text = value.to_string();
    match parameter.kind() {
        Some(kind) if !kind.validate(&text) => Err(RenderError::InvalidValue {
            parameter: parameter.to_string(),
            kind,
            value: text,
        }),
        _ => Ok(text),
    }
}

fn render_path(
    nodes: &[PathPattern],
    cursor: &mut Cursor<'_>,
    out: &mut Vec<String>,
) -> Result<(), RenderError> {
    for node in nodes {
        match node {
            PathPattern::Literal(text) => out.push(text.clone()),
            PathPattern::Wildcard => out.push("*".to_string()),
            PathPattern::Param(parameter) => {
                let value = next_value(cursor, node)?;
                let text = parameter_text(parameter, value, node)?;
                if text.is_empty() {
                    return Err(RenderError::EmptyValue {
                        parameter: parameter.to_string(),
                    });
                }
                out.push(text);
            }
            PathPattern::Alternation(left, right) => match next_value(cursor, node)? {
                Value::Either(branch, values) => {
                    let chosen = match branch {
                        Branch::Left => left,
                        Branch::Right => right,
                    };
                    render_nested(chosen, values, out)?;
                }
                other => return Err(unexpected(node, other)),
            },
            PathPattern::Optional(route) => match next_value(cursor, node)? {
                Value::Maybe(None) => {}
                Value::Maybe(Some(values)) => render_nested(route, values, out)?,
                other => return Err(unexpected(node, other)),
            },
        }
    }
    Ok(())
}

/// Render a sub-route from its own payload, which it must use up
fn render_nested(
    nodes: &[PathPattern],
    values: &[Value],
    out: &mut Vec<String>,
) -> Result<(), RenderError> {
    let mut cursor = values.iter();
    render_path(nodes, &mut cursor, out)?;
    ensure_consumed(cursor, || join_path(nodes))
}

/// A query parameter wrapped in an optional or alternation payload
fn single_parameter(
    parameter: &Parameter,
    values: &[Value],
    node: &QueryPattern,
) -> Result<(String, String), RenderError> {
    let mut cursor = values.iter();
    let value = next_value(&mut cursor, node)?;
    let text = parameter_text(parameter, value, node)?;
    ensure_consumed(cursor, || node.to_string())?;
    Ok((parameter.name().to_string(), text))
}

fn render_query(
    node: &QueryPattern,
    cursor: &mut Cursor<'_>,
    out: &mut Vec<(String, String)>,
) -> Result<(), RenderError> {
    let value = next_value(cursor, node)?;
    match (node, value) {
        (QueryPattern::Required(parameter), value) => {
            let text = parameter_text(parameter, value, node)?;
            out.push((parameter.name().to_string(), text));
        }
        (QueryPattern::Optional(_), Value::Maybe(None)) => {}
        (QueryPattern::Optional(parameter), Value::Maybe(Some(values))) => {
            out.push(single_parameter(parameter, values, node)?);
        }
        (QueryPattern::Alternation(first, second), Value::Either(branch, values)) => {
            let chosen = match branch {
                Branch::Left => first,
                Branch::Right => second,
            };
            out.push(single_parameter(chosen, values, node)?);
        }
        (_, other) => return Err(unexpected(node, other)),
    }
    Ok(())
}
