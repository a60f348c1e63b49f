//! Format parser: template string to [`Route`]
//!
//! The template is tokenized by [`crate::lexing`], split at the first `?`
//! into path and query parts, and each part is parsed separately:
//!
//! - [`path`]: paren-depth-aware splitting and component classification
//! - [`query`]: `&`-separated items
//! - [`params`]: chumsky grammar for parameters and query items
//!
//! Errors are reported as [`ParseError`]. Templates are registration-time
//! configuration, so callers are expected to fail fast on them.

mod error;
mod params;
mod path;
mod query;
mod splitting;

pub use error::ParseError;

/// Deepest parenthesis nesting a template may use
///
/// Parsing, printing and matching all recurse once per group level.
pub const MAX_NESTING: usize = 128;

use crate::lexing::{tokenize_with_spans, Token};
use crate::pattern::Route;

/// Compile a template string into a route
pub fn parse_template(template: &str) -> Result<Route, ParseError> {
    let tokens =
        tokenize_with_spans(template).map_err(|span| ParseError::UnexpectedCharacter {
            offset: span.start,
            snippet: template[span.clone()].to_string(),
        })?;

    let question = tokens.iter().position(|(t, _)| *t == Token::Question);
    let (path_tokens, query_tokens, query_offset) = match question {
        Some(index) => (
            &tokens[..index],
            &tokens[index + 1..],
            tokens[index].1.end,
        ),
        None => (&tokens[..], &tokens[tokens.len()..], template.len()),
    };

    splitting::check_balance(path_tokens)?;
    splitting::check_balance(query_tokens)?;

    let path = path::parse_path(template, path_tokens)?;
    let query = query::parse_query(template, query_tokens, query_offset)?;

    tracing::trace!(
        template,
        path_nodes = path.len(),
        query_nodes = query.len(),
        "parsed route template"
    );
    Ok(Route::new(path, query))
}
