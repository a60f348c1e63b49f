//! Value payloads for the printer

use super::error::RenderError;
use std::fmt;

/// A single parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Double(f64),
    Bool(bool),
    Text(String),
}

impl ParamValue {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Int(_) => "int",
            ParamValue::Double(_) => "double",
            ParamValue::Bool(_) => "bool",
            ParamValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(value) => write!(f, "{}", value),
            ParamValue::Double(value) => write!(f, "{}", value),
            ParamValue::Bool(value) => write!(f, "{}", value),
            ParamValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Double(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// Which side of an alternation to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Left,
    Right,
}

/// Payload for one value-taking node of a route
///
/// Param nodes take `Param`, alternations take `Either` with the chosen
/// branch's own payload, optional groups take `Maybe`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Param(ParamValue),
    Either(Branch, Vec<Value>),
    Maybe(Option<Vec<Value>>),
}

impl Value {
    pub fn param(value: impl Into<ParamValue>) -> Self {
        Value::Param(value.into())
    }

    pub fn left(values: Vec<Value>) -> Self {
        Value::Either(Branch::Left, values)
    }

    pub fn right(values: Vec<Value>) -> Self {
        Value::Either(Branch::Right, values)
    }

    pub fn some(values: Vec<Value>) -> Self {
        Value::Maybe(Some(values))
    }

    pub fn none() -> Self {
        Value::Maybe(None)
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Value::Param(value) => format!("{} value `{}`", value.kind_name(), value),
            Value::Either(Branch::Left, _) => "left branch".to_string(),
            Value::Either(Branch::Right, _) => "right branch".to_string(),
            Value::Maybe(Some(_)) => "present group".to_string(),
            Value::Maybe(None) => "absent group".to_string(),
        }
    }
}

impl From<ParamValue> for Value {
    fn from(value: ParamValue) -> Self {
        Value::Param(value)
    }
}

/// Build a payload from JSON
///
/// The top level must be an array. Numbers become `Int` (or `Double` when
/// not integral), booleans `Bool`, strings `Text`, `null` an absent group,
/// arrays a present group, and `{"left": ...}` / `{"right": ...}` a branch.
pub fn values_from_json(json: &serde_json::Value) -> Result<Vec<Value>, RenderError> {
    match json {
        serde_json::Value::Array(items) => items.iter().map(value_from_json).collect(),
        other => Err(RenderError::InvalidPayload {
            reason: format!("expected an array of values, found `{}`", other),
        }),
    }
}

fn value_from_json(json: &serde_json::Value) -> Result<Value, RenderError> {
    use serde_json::Value as Json;

    match json {
        Json::Null => Ok(Value::none()),
        Json::Bool(value) => Ok(Value::param(*value)),
        Json::Number(number) => match number.as_i64() {
            Some(value) => Ok(Value::param(value)),
            None => number
                .as_f64()
                .map(Value::param)
                .ok_or_else(|| RenderError::InvalidPayload {
                    reason: format!("unsupported number `{}`", number),
                }),
        },
        Json::String(text) => Ok(Value::param(text.as_str())),
        Json::Array(_) => values_from_json(json).map(Value::some),
        Json::Object(fields) => {
            let mut entries = fields.iter();
            let (Some((key, inner)), None) = (entries.next(), entries.next()) else {
                return Err(RenderError::InvalidPayload {
                    reason: "a branch object needs exactly one key".to_string(),
                });
            };
            let branch = match key.as_str() {
                "left" => Branch::Left,
                "right" => Branch::Right,
                other => {
                    return Err(RenderError::InvalidPayload {
                        reason: format!("unknown branch `{}`", other),
                    })
                }
            };
            let values = match inner {
                Json::Array(_) => values_from_json(inner)?,
                single => vec![value_from_json(single)?],
            };
            Ok(Value::Either(branch, values))
        }
    }
}
