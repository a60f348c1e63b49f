//! Print failures

use crate::pattern::ParamType;
use thiserror::Error;

/// A value payload that does not fit the route it is rendered with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("missing value for `{expected}`")]
    MissingValue { expected: String },

    #[error("expected a value for `{expected}`, found {found}")]
    UnexpectedValue { expected: String, found: String },

    #[error("value `{value}` is not a valid {kind} for parameter `{parameter}`")]
    InvalidValue {
        parameter: String,
        kind: ParamType,
        value: String,
    },

    #[error("empty value for path parameter `{parameter}`")]
    EmptyValue { parameter: String },

    #[error("{count} unused value(s) after rendering `{route}`")]
    UnusedValues { route: String, count: usize },

    #[error("invalid value payload: {reason}")]
    InvalidPayload { reason: String },
}
