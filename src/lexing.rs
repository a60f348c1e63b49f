//! Lexer for route templates
//!
//! Tokenization is handled by logos. The parser works on tokens paired with
//! their byte spans so errors can point back into the template.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;

/// Token paired with its byte range in the template
pub type TokenSpan = (Token, logos::Span);

/// Tokenize a template, keeping spans
///
/// Fails with the span of the first slice logos cannot tokenize (a trailing
/// backslash is the only such input).
pub fn tokenize_with_spans(source: &str) -> Result<Vec<TokenSpan>, logos::Span> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => return Err(lexer.span()),
        }
    }

    Ok(tokens)
}

/// Convenience function to tokenize a template, dropping spans and bad input
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Concatenate the literal text of tokens, resolving escapes
pub fn literal_text<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut text = String::new();
    for token in tokens {
        token.push_text(&mut text);
    }
    text
}
