//! Template parse errors

use thiserror::Error;

/// A template that does not fit the route grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character at offset {offset}: `{snippet}`")]
    UnexpectedCharacter { offset: usize, snippet: String },

    #[error("unbalanced parenthesis at offset {offset}")]
    UnbalancedParenthesis { offset: usize },

    #[error("parentheses nested too deeply at offset {offset}")]
    NestingTooDeep { offset: usize },

    #[error("empty alternation branch in `{component}`")]
    EmptyAlternative { component: String },

    #[error("empty group in `{component}`")]
    EmptyGroup { component: String },

    #[error("misplaced parenthesis in path component `{component}`")]
    MisplacedGroup { component: String },

    #[error("invalid parameter `{component}`: {reason}")]
    InvalidParameter { component: String, reason: String },

    #[error("empty query item at offset {offset}")]
    EmptyQueryItem { offset: usize },

    #[error("invalid query item `{item}`: {reason}")]
    InvalidQueryItem { item: String, reason: String },
}
