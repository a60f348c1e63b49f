//! Route pattern AST
//!
//! A [`Route`] is the compiled form of a route template: an ordered list of
//! [`PathPattern`] nodes plus an ordered list of [`QueryPattern`] nodes.
//! Routes are built once, either by the [format parser](crate::parsing) or by
//! the [builder](crate::builder), and never mutated afterwards.
//!
//! The `Display` implementation of every node renders the canonical template
//! text. Parsing that text back yields a structurally equal AST.

pub mod parameter;
pub mod route;

pub use parameter::{ParamType, Parameter};
pub use route::{PathPattern, QueryPattern, Route};

/// Characters with a meaning in the template grammar
pub const RESERVED: [char; 10] = ['/', '|', '(', ')', '?', '&', ':', '=', '*', '\\'];

/// Escape reserved characters so `text` reads back as a single literal
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text() {
        assert_eq!(escape("recipes"), "recipes");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape("a/b"), "a\\/b");
        assert_eq!(escape(":id"), "\\:id");
        assert_eq!(escape("*"), "\\*");
        assert_eq!(escape("a\\b"), "a\\\\b");
    }
}
