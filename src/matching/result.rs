//! Match outcome

use crate::pattern::Parameter;
use std::collections::HashMap;

/// Parameter bindings extracted by a match
pub type Bindings = HashMap<Parameter, String>;

/// Outcome of matching a route against URL components
///
/// A failed match never carries bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    matched: bool,
    params: Bindings,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self::default()
    }

    pub(crate) fn matched(params: Bindings) -> Self {
        Self {
            matched: true,
            params,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn params(&self) -> &Bindings {
        &self.params
    }

    /// Value bound to a parameter identity
    pub fn get(&self, parameter: &Parameter) -> Option<&str> {
        self.params.get(parameter).map(String::as_str)
    }

    /// Bindings sorted by parameter, for stable output
    pub fn sorted_params(&self) -> Vec<(&Parameter, &str)> {
        let mut params: Vec<_> = self
            .params
            .iter()
            .map(|(parameter, value)| (parameter, value.as_str()))
            .collect();
        params.sort();
        params
    }

    /// Bindings of a successful match, `None` otherwise
    pub fn into_params(self) -> Option<Bindings> {
        self.matched.then_some(self.params)
    }
}
