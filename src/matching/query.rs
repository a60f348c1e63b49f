//! Query matching over a consumable working copy of the pairs

use super::result::Bindings;
use crate::pattern::{Parameter, QueryPattern};

/// Remove the first pair satisfying `parameter` and return its value
fn take(parameter: &Parameter, remaining: &mut Vec<(&str, &str)>) -> Option<String> {
    let index = remaining
        .iter()
        .position(|(key, value)| *key == parameter.name() && parameter.accepts(value))?;
    let (_, value) = remaining.remove(index);
    Some(value.to_string())
}

fn bind(bindings: &mut Bindings, parameter: &Parameter, value: String) {
    if !parameter.is_anonymous() {
        bindings.insert(parameter.clone(), value);
    }
}

/// Match query patterns against query pairs
///
/// Every pair satisfies at most one pattern. Pairs no pattern asks for are
/// ignored.
pub(crate) fn match_query(
    patterns: &[QueryPattern],
    pairs: &[(String, String)],
) -> Option<Bindings> {
    let mut remaining: Vec<(&str, &str)> = pairs
        .iter()
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    let mut bindings = Bindings::new();

    for pattern in patterns {
        match pattern {
            QueryPattern::Required(parameter) => {
                let value = take(parameter, &mut remaining)?;
                bind(&mut bindings, parameter, value);
            }
            QueryPattern::Optional(parameter) => {
                if let Some(value) = take(parameter, &mut remaining) {
                    bind(&mut bindings, parameter, value);
                }
            }
            QueryPattern::Alternation(first, second) => {
                if let Some(value) = take(first, &mut remaining) {
                    bind(&mut bindings, first, value);
                } else {
                    let value = take(second, &mut remaining)?;
                    bind(&mut bindings, second, value);
                }
            }
        }
    }

    Some(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_same_key_cannot_satisfy_two_patterns() {
        let patterns = vec![
            QueryPattern::Required(Parameter::untyped("id")),
            QueryPattern::Required(Parameter::int("id")),
        ];
        assert!(match_query(&patterns, &pairs(&[("id", "1")])).is_none());
        let bindings = match_query(&patterns, &pairs(&[("id", "a"), ("id", "2")])).unwrap();
        assert_eq!(bindings[&Parameter::untyped("id")], "a");
        assert_eq!(bindings[&Parameter::int("id")], "2");
    }

    #[test]
    fn test_invalid_value_is_skipped() {
        let patterns = vec![QueryPattern::Required(Parameter::int("page"))];
        let bindings = match_query(&patterns, &pairs(&[("page", "x"), ("page", "3")])).unwrap();
        assert_eq!(bindings[&Parameter::int("page")], "3");
    }

    #[test]
    fn test_alternation_prefers_first() {
        let patterns = vec![QueryPattern::Alternation(
            Parameter::untyped("utm"),
            Parameter::untyped("tmp"),
        )];
        let bindings = match_query(&patterns, &pairs(&[("tmp", "1"), ("utm", "2")])).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[&Parameter::untyped("utm")], "2");
    }
}
