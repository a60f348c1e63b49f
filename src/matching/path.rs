//! Path matching
//!
//! A sequence of nodes is matched against a prefix of the components: every
//! node must be satisfied, components may be left over. The caller decides
//! whether leftovers are acceptable (the whole route requires none, an
//! alternation branch or optional group consumes only what it matched).
//!
//! An optional group may also run out of components before its own nodes do.
//! As long as nothing mismatched, the components it did match are kept.

use super::result::Bindings;
use crate::pattern::{Parameter, PathPattern};

/// Components consumed and bindings produced by a partial match
type Step = (usize, Bindings);

/// How a sequence treats running out of components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fill {
    /// Every node must be satisfied
    Complete,
    /// Stop successfully once the components are exhausted
    UntilExhausted,
}

/// Match the whole component list
pub(crate) fn match_path(nodes: &[PathPattern], components: &[&str]) -> Option<Bindings> {
    let (consumed, bindings) = match_sequence(nodes, components, Fill::Complete)?;
    (consumed == components.len()).then_some(bindings)
}

/// Match every node against a prefix of `components`
fn match_sequence(nodes: &[PathPattern], components: &[&str], fill: Fill) -> Option<Step> {
    let mut cursor = 0;
    let mut bindings = Bindings::new();
    let mut index = 0;

    while index < nodes.len() {
        let remaining = &components[cursor..];
        if remaining.is_empty() && fill == Fill::UntilExhausted {
            break;
        }

        if nodes[index].is_wildcard() {
            let rest = &nodes[index + 1..];
            let Some(next) = rest.first() else {
                // trailing wildcard takes everything, but needs something
                if remaining.is_empty() {
                    return None;
                }
                cursor = components.len();
                break;
            };

            if remaining.len() < nodes.len() - index {
                return None;
            }

            let (skipped, (consumed, found)) = (1..remaining.len())
                .find_map(|skip| match_node(next, &remaining[skip..]).map(|step| (skip, step)))?;
            cursor += skipped + consumed;
            bindings.extend(found);
            index += 2;
            continue;
        }

        let (consumed, found) = match_node(&nodes[index], remaining)?;
        cursor += consumed;
        bindings.extend(found);
        index += 1;
    }

    Some((cursor, bindings))
}

/// Match a single node at the start of `components`
fn match_node(node: &PathPattern, components: &[&str]) -> Option<Step> {
    match node {
        PathPattern::Literal(text) => {
            let component = components.first()?;
            (*component == text.as_str()).then(|| (1, Bindings::new()))
        }
        PathPattern::Param(parameter) => {
            let component = components.first()?;
            parameter
                .accepts(component)
                .then(|| (1, bind(parameter, component)))
        }
        PathPattern::Alternation(left, right) => match_alternation(left, right, components),
        PathPattern::Optional(route) => Some(
            match_sequence(route, components, Fill::UntilExhausted)
                .unwrap_or_else(|| (0, Bindings::new())),
        ),
        // only reached as the lookahead of another wildcard
        PathPattern::Wildcard => None,
    }
}

/// Try the longer branch first; equal lengths keep left before right
fn match_alternation(
    left: &[PathPattern],
    right: &[PathPattern],
    components: &[&str],
) -> Option<Step> {
    let mut candidates = [left, right];
    candidates.sort_by(|a, b| b.len().cmp(&a.len()));
    candidates
        .iter()
        .find_map(|candidate| match_sequence(candidate, components, Fill::Complete))
}

fn bind(parameter: &Parameter, value: &str) -> Bindings {
    let mut bindings = Bindings::new();
    if !parameter.is_anonymous() {
        bindings.insert(parameter.clone(), value.to_string());
    }
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> PathPattern {
        PathPattern::literal(text)
    }

    #[test]
    fn test_sequence_allows_leftover_but_path_does_not() {
        let nodes = vec![lit("recipe")];
        assert_eq!(
            match_sequence(&nodes, &["recipe", "123"], Fill::Complete).map(|(n, _)| n),
            Some(1)
        );
        assert!(match_path(&nodes, &["recipe", "123"]).is_none());
    }

    #[test]
    fn test_anonymous_param_does_not_bind() {
        let nodes = vec![PathPattern::param(Parameter::int(""))];
        let bindings = match_path(&nodes, &["12"]).unwrap();
        assert!(bindings.is_empty());
        assert!(match_path(&nodes, &["x"]).is_none());
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let left = vec![PathPattern::param(Parameter::untyped("a"))];
        let right = vec![PathPattern::param(Parameter::untyped("b"))];
        let (_, bindings) = match_alternation(&left, &right, &["x"]).unwrap();
        assert_eq!(bindings[&Parameter::untyped("a")], "x");
    }

    #[test]
    fn test_optional_at_end_of_input() {
        let nodes = vec![lit("recipe"), PathPattern::optional(vec![lit("details")])];
        assert!(match_path(&nodes, &["recipe"]).is_some());
    }

    #[test]
    fn test_optional_keeps_what_it_matched_before_input_ends() {
        let id = Parameter::untyped("id");
        let nodes = vec![
            lit("recipe"),
            PathPattern::optional(vec![lit("details"), PathPattern::param(id.clone())]),
        ];
        assert!(match_path(&nodes, &["recipe", "details"]).unwrap().is_empty());
        assert_eq!(
            match_path(&nodes, &["recipe", "details", "7"]).unwrap()[&id],
            "7"
        );
        // a mismatch inside the group still makes it absent
        assert!(match_path(&nodes, &["recipe", "summary"]).is_none());
    }

    #[test]
    fn test_alternation_branches_need_every_node() {
        let left = vec![lit("recipe"), lit("details")];
        let right = vec![lit("menu")];
        assert!(match_alternation(&left, &right, &["recipe"]).is_none());
    }

    #[test]
    fn test_wildcard_lookahead_on_wildcard_fails() {
        let nodes = vec![lit("recipe"), PathPattern::Wildcard, PathPattern::Wildcard];
        assert!(match_path(&nodes, &["recipe", "a", "b", "c"]).is_none());
    }
}
