//! Parameter and query item grammar
//!
//! Chumsky parsers over token spans. Structural splitting of the template
//! (slashes, groups, alternation) is done by hand in [`super::path`]; these
//! parsers only see a single path component or a single query item.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;

use crate::lexing::{literal_text, Token, TokenSpan};
use crate::pattern::{ParamType, Parameter, QueryPattern};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Match a specific token, ignoring its span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).ignored()
}

fn text_of(tokens: &[TokenSpan]) -> String {
    literal_text(tokens.iter().map(|(t, _)| t))
}

/// `int`, `double`, `bool` or `string`
fn type_keyword() -> impl Parser<TokenSpan, ParamType, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| matches!(t, Token::Text(_))).try_map(|(t, _), span| {
        let keyword = t.to_string();
        ParamType::from_keyword(&keyword)
            .ok_or_else(|| Simple::custom(span, format!("unknown parameter type `{}`", keyword)))
    })
}

/// A name made of plain text only
fn plain_name() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| t.is_text())
        .repeated()
        .at_least(1)
        .map(|tokens: Vec<TokenSpan>| text_of(&tokens))
}

/// Everything between the parentheses of `:type(name)`, possibly empty
fn group_name() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter(|(t, _): &TokenSpan| !matches!(t, Token::OpenParen | Token::CloseParen))
        .repeated()
        .map(|tokens: Vec<TokenSpan>| text_of(&tokens))
}

/// A whole path component starting with `:`
///
/// `:type(name)` gives a typed parameter; any other remainder is taken
/// verbatim as the name of an untyped parameter.
pub(crate) fn path_parameter() -> impl Parser<TokenSpan, Parameter, Error = ParserError> + Clone {
    let typed = type_keyword()
        .then(group_name().delimited_by(token(Token::OpenParen), token(Token::CloseParen)))
        .then_ignore(end())
        .map(|(kind, name)| Parameter::typed(kind, name));

    let untyped = any::<TokenSpan, ParserError>()
        .repeated()
        .then_ignore(end())
        .map(|tokens: Vec<TokenSpan>| Parameter::untyped(text_of(&tokens)));

    token(Token::Colon).ignore_then(typed.or(untyped))
}

/// `:name`, `:type(name)` or `name=:type`
fn query_parameter() -> impl Parser<TokenSpan, Parameter, Error = ParserError> + Clone {
    let keyed = plain_name()
        .then_ignore(token(Token::Equals))
        .then_ignore(token(Token::Colon))
        .then(type_keyword())
        .map(|(name, kind)| Parameter::typed(kind, name));

    let typed = type_keyword()
        .then(plain_name().delimited_by(token(Token::OpenParen), token(Token::CloseParen)))
        .map(|(kind, name)| Parameter::typed(kind, name));

    let untyped = plain_name().map(Parameter::untyped);

    keyed.or(token(Token::Colon).ignore_then(typed.or(untyped)))
}

/// A single query item between `&` separators
pub(crate) fn query_item() -> impl Parser<TokenSpan, QueryPattern, Error = ParserError> + Clone {
    let alternation = query_parameter()
        .then_ignore(token(Token::Pipe))
        .then(query_parameter())
        .delimited_by(token(Token::OpenParen), token(Token::CloseParen))
        .map(|(first, second)| QueryPattern::Alternation(first, second));

    let optional = query_parameter()
        .delimited_by(token(Token::OpenParen), token(Token::CloseParen))
        .map(QueryPattern::Optional);

    let required = query_parameter().map(QueryPattern::Required);

    alternation.or(optional).or(required).then_ignore(end())
}

/// Human readable reason for the first parser error
pub(crate) fn describe(errors: Vec<ParserError>) -> String {
    errors
        .into_iter()
        .next()
        .map(|error| match error.reason() {
            SimpleReason::Custom(message) => message.clone(),
            _ => match error.found() {
                Some((t, _)) => format!("unexpected `{}`", t),
                None => "unexpected end of input".to_string(),
            },
        })
        .unwrap_or_else(|| "unrecognized input".to_string())
}
