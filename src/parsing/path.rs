//! Path part of a template
//!
//! Components are classified in a fixed priority order: wildcard, parameter,
//! alternation, optional group, literal. Group interiors and alternation
//! branches are parsed recursively as sub-routes.

use chumsky::Parser;

use super::error::ParseError;
use super::params::{describe, path_parameter};
use super::splitting::{find_top_level, source_text, split_top_level, unwrap_group};
use crate::lexing::{literal_text, Token, TokenSpan};
use crate::pattern::PathPattern;

/// Parse a `/`-separated sequence of components into path nodes
pub(crate) fn parse_path(
    source: &str,
    tokens: &[TokenSpan],
) -> Result<Vec<PathPattern>, ParseError> {
    let mut nodes = Vec::new();
    for component in split_top_level(tokens, &Token::Slash) {
        if let Some(node) = parse_component(source, component)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// An alternation branch: `|` binds looser than `/` inside a group
fn parse_branch(source: &str, tokens: &[TokenSpan]) -> Result<Vec<PathPattern>, ParseError> {
    match find_top_level(tokens, &Token::Pipe) {
        Some(pipe) => Ok(vec![alternation(source, tokens, pipe)?]),
        None => parse_path(source, tokens),
    }
}

/// Split at the first top-level `|`; the right side keeps the remaining alternatives
fn alternation(source: &str, tokens: &[TokenSpan], pipe: usize) -> Result<PathPattern, ParseError> {
    let left = parse_path(source, &tokens[..pipe])?;
    let right = parse_branch(source, &tokens[pipe + 1..])?;
    if left.is_empty() || right.is_empty() {
        return Err(ParseError::EmptyAlternative {
            component: source_text(source, tokens),
        });
    }
    Ok(PathPattern::Alternation(left, right))
}

/// Classify a single component; empty components produce no node
fn parse_component(source: &str, tokens: &[TokenSpan]) -> Result<Option<PathPattern>, ParseError> {
    let Some((first, _)) = tokens.first() else {
        return Ok(None);
    };

    if tokens.len() == 1 && *first == Token::Star {
        return Ok(Some(PathPattern::Wildcard));
    }

    if *first == Token::Colon {
        let parameter = path_parameter()
            .parse(tokens.to_vec())
            .map_err(|errors| ParseError::InvalidParameter {
                component: source_text(source, tokens),
                reason: describe(errors),
            })?;
        return Ok(Some(PathPattern::Param(parameter)));
    }

    let group = unwrap_group(tokens);
    let inner = group.unwrap_or(tokens);

    if let Some(pipe) = find_top_level(inner, &Token::Pipe) {
        return alternation(source, inner, pipe).map(Some);
    }

    if let Some(inner) = group {
        let route = parse_path(source, inner)?;
        if route.is_empty() {
            return Err(ParseError::EmptyGroup {
                component: source_text(source, tokens),
            });
        }
        return Ok(Some(PathPattern::Optional(route)));
    }

    if tokens
        .iter()
        .any(|(t, _)| matches!(t, Token::OpenParen | Token::CloseParen))
    {
        return Err(ParseError::MisplacedGroup {
            component: source_text(source, tokens),
        });
    }

    Ok(Some(PathPattern::Literal(literal_text(
        tokens.iter().map(|(t, _)| t),
    ))))
}
