//! Query part of a template

use chumsky::Parser;

use super::error::ParseError;
use super::params::{describe, query_item};
use super::splitting::{source_text, split_top_level};
use crate::lexing::{Token, TokenSpan};
use crate::pattern::QueryPattern;

/// Parse `&`-separated query items
///
/// `offset` is where the query part starts in the template, used when an
/// item is empty and has no span of its own.
pub(crate) fn parse_query(
    source: &str,
    tokens: &[TokenSpan],
    offset: usize,
) -> Result<Vec<QueryPattern>, ParseError> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut position = offset;
    for item in split_top_level(tokens, &Token::Ampersand) {
        let Some((_, last)) = item.last() else {
            return Err(ParseError::EmptyQueryItem { offset: position });
        };
        position = last.end + 1;

        let pattern = query_item()
            .parse(item.to_vec())
            .map_err(|errors| ParseError::InvalidQueryItem {
                item: source_text(source, item),
                reason: describe(errors),
            })?;
        items.push(pattern);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize_with_spans;
    use crate::pattern::Parameter;

    fn parse(source: &str) -> Result<Vec<QueryPattern>, ParseError> {
        parse_query(source, &tokenize_with_spans(source).unwrap(), 0)
    }

    #[test]
    fn test_mixed_items() {
        assert_eq!(
            parse(":recipeId&(:int(menuId))&(:utm|:tmp)"),
            Ok(vec![
                QueryPattern::Required(Parameter::untyped("recipeId")),
                QueryPattern::Optional(Parameter::int("menuId")),
                QueryPattern::Alternation(Parameter::untyped("utm"), Parameter::untyped("tmp")),
            ])
        );
    }

    #[test]
    fn test_keyed_items() {
        assert_eq!(
            parse("recipeId=:int&menuId=:int"),
            Ok(vec![
                QueryPattern::Required(Parameter::int("recipeId")),
                QueryPattern::Required(Parameter::int("menuId")),
            ])
        );
    }

    #[test]
    fn test_empty_item() {
        assert_eq!(
            parse(":a&&:b"),
            Err(ParseError::EmptyQueryItem { offset: 3 })
        );
    }

    #[test]
    fn test_invalid_item_names_the_item() {
        match parse(":a&id=:float") {
            Err(ParseError::InvalidQueryItem { item, .. }) => assert_eq!(item, "id=:float"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
