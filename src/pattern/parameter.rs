//! Parameter identities and their value validators

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type a parameter value must parse as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Int,
    Double,
    Bool,
    String,
}

impl ParamType {
    pub const ALL: [ParamType; 4] = [
        ParamType::Int,
        ParamType::Double,
        ParamType::Bool,
        ParamType::String,
    ];

    /// Template keyword for this type
    pub fn keyword(&self) -> &'static str {
        match self {
            ParamType::Int => "int",
            ParamType::Double => "double",
            ParamType::Bool => "bool",
            ParamType::String => "string",
        }
    }

    /// Look up a type by its template keyword (exact, lowercase)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == keyword)
    }

    /// Check whether a raw value is acceptable for this type
    pub fn validate(&self, value: &str) -> bool {
        match self {
            ParamType::Int => value.parse::<i64>().is_ok(),
            ParamType::Double => value.parse::<f64>().is_ok(),
            ParamType::Bool => matches!(
                value.to_ascii_lowercase().as_str(),
                "true" | "false" | "0" | "1"
            ),
            ParamType::String => true,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parameter identity: name plus optional type
///
/// Two parameters with the same name but different types are different keys.
/// An empty name makes the parameter anonymous: it still consumes and
/// validates a value but never produces a binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    #[serde(rename = "type")]
    kind: Option<ParamType>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: Option<ParamType>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    pub fn typed(kind: ParamType, name: impl Into<String>) -> Self {
        Self::new(name, Some(kind))
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::typed(ParamType::Int, name)
    }

    pub fn double(name: impl Into<String>) -> Self {
        Self::typed(ParamType::Double, name)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::typed(ParamType::Bool, name)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::typed(ParamType::String, name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<ParamType> {
        self.kind
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }

    /// Run the type validator; untyped parameters accept anything
    pub fn accepts(&self, value: &str) -> bool {
        self.kind.map_or(true, |kind| kind.validate(value))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => write!(f, "{}({})", kind, self.name),
            None => f.write_str(&self.name),
        }
    }
}
