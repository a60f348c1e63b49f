//! Paren-depth-aware scanning over token slices

use super::error::ParseError;
use super::MAX_NESTING;
use crate::lexing::{Token, TokenSpan};

/// Template text covered by a token slice
pub(crate) fn source_text(source: &str, tokens: &[TokenSpan]) -> String {
    match (tokens.first(), tokens.last()) {
        (Some((_, first)), Some((_, last))) => source[first.start..last.end].to_string(),
        _ => String::new(),
    }
}

/// Check that every parenthesis in the slice is matched and that groups
/// nest no deeper than [`MAX_NESTING`]
pub(crate) fn check_balance(tokens: &[TokenSpan]) -> Result<(), ParseError> {
    let mut open = Vec::new();
    for (token, span) in tokens {
        match token {
            Token::OpenParen => {
                open.push(span.start);
                if open.len() > MAX_NESTING {
                    return Err(ParseError::NestingTooDeep { offset: span.start });
                }
            }
            Token::CloseParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnbalancedParenthesis { offset: span.start });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(offset) => Err(ParseError::UnbalancedParenthesis { offset }),
        None => Ok(()),
    }
}

/// Split on `delimiter` wherever it appears outside of parentheses
///
/// Assumes the slice is balanced. Always returns at least one part.
pub(crate) fn split_top_level<'a>(
    tokens: &'a [TokenSpan],
    delimiter: &Token,
) -> Vec<&'a [TokenSpan]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth = depth.saturating_sub(1),
            token if depth == 0 && token == delimiter => {
                parts.push(&tokens[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

/// Index of the first `delimiter` outside of parentheses
pub(crate) fn find_top_level(tokens: &[TokenSpan], delimiter: &Token) -> Option<usize> {
    let mut depth = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => depth = depth.saturating_sub(1),
            token if depth == 0 && token == delimiter => return Some(index),
            _ => {}
        }
    }
    None
}

/// Interior of a slice wrapped in one matching pair of parentheses
///
/// `(a)(b)` is not wrapped: its first parenthesis closes before the end.
pub(crate) fn unwrap_group(tokens: &[TokenSpan]) -> Option<&[TokenSpan]> {
    if tokens.len() < 2 || tokens[0].0 != Token::OpenParen {
        return None;
    }
    let mut depth = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::OpenParen => depth += 1,
            Token::CloseParen => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (index == tokens.len() - 1).then(|| &tokens[1..index]);
                }
            }
            _ => {}
        }
    }
    None
}
