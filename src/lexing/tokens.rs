//! Token definitions for route templates
//!
//! Every reserved character of the template grammar gets its own token.
//! A backslash makes the next character plain text; everything else runs
//! together into `Text`.
use logos::Logos;
use std::fmt;

/// All possible tokens in a route template
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    #[token("/")]
    Slash,
    #[token("|")]
    Pipe,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("?")]
    Question,
    #[token("&")]
    Ampersand,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token("*")]
    Star,

    // Backslash escape, carries the escaped character
    #[regex(r"\\.", |lex| lex.slice().chars().nth(1))]
    Escaped(char),

    // Text content (catch-all for non-special characters)
    #[regex(r"[^/|()?&:=*\\]+", |lex| lex.slice().to_string())]
    Text(String),
}

impl Token {
    /// Check if this token is plain text (escapes included)
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_) | Token::Escaped(_))
    }

    /// Append the literal text this token stands for
    pub fn push_text(&self, out: &mut String) {
        match self {
            Token::Text(text) => out.push_str(text),
            Token::Escaped(ch) => out.push(*ch),
            Token::Slash => out.push('/'),
            Token::Pipe => out.push('|'),
            Token::OpenParen => out.push('('),
            Token::CloseParen => out.push(')'),
            Token::Question => out.push('?'),
            Token::Ampersand => out.push('&'),
            Token::Colon => out.push(':'),
            Token::Equals => out.push('='),
            Token::Star => out.push('*'),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Escaped(ch) => write!(f, "\\{}", ch),
            other => {
                let mut text = String::new();
                other.push_text(&mut text);
                f.write_str(&text)
            }
        }
    }
}
