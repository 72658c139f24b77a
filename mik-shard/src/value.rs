//! Runtime parameter values and their conversions.

use miniserde::json::{Number, Value as JsonValue};

use crate::error::PaginationError;

/// A positional SQL parameter value supplied at execution time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Self>),
}

impl Value {
    /// Coerce to a whole number.
    ///
    /// Integers pass through. Floats are accepted when they are finite, have no
    /// fractional part and fit in an `i64`. Everything else yields `None`.
    ///
    /// ```
    /// use mik_shard::Value;
    ///
    /// assert_eq!(Value::Int(7).as_whole_number(), Some(7));
    /// assert_eq!(Value::Float(20.0).as_whole_number(), Some(20));
    /// assert_eq!(Value::Float(2.5).as_whole_number(), None);
    /// assert_eq!(Value::from("10").as_whole_number(), None);
    /// ```
    #[must_use]
    pub fn as_whole_number(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) => {
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
                let in_range = *f >= i64::MIN as f64 && *f < i64::MAX as f64;
                (f.is_finite() && f.fract() == 0.0 && in_range).then_some(*f as i64)
            },
            Self::Null | Self::Bool(_) | Self::String(_) | Self::Array(_) => None,
        }
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
        }
    }

    /// Convert from miniserde JSON value.
    ///
    /// Every JSON value has a parameter form, so one odd element never sinks
    /// a whole parameter list. Unsigned integers above `i64::MAX` become
    /// floats and objects are kept as their JSON text.
    ///
    /// ```
    /// use mik_shard::Value;
    /// use mik_shard::json::{Number, Value as JsonValue};
    ///
    /// let json = JsonValue::Number(Number::I64(42));
    /// assert_eq!(Value::from_json(&json), Value::Int(42));
    ///
    /// let json = JsonValue::Number(Number::U64(u64::MAX));
    /// assert_eq!(Value::from_json(&json), Value::Float(u64::MAX as f64));
    /// ```
    #[must_use]
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => match n {
                Number::I64(i) => Self::Int(*i),
                Number::U64(u) => i64::try_from(*u).map_or(Self::Float(*u as f64), Self::Int),
                Number::F64(f) => Self::Float(*f),
            },
            JsonValue::String(s) => Self::String(s.clone()),
            JsonValue::Array(arr) => Self::Array(arr.iter().map(Self::from_json).collect()),
            JsonValue::Object(_) => Self::String(miniserde::json::to_string(json)),
        }
    }

    /// Parse a positional parameter list from a JSON array string.
    ///
    /// Fails only when the document is not valid JSON or not an array.
    ///
    /// ```
    /// use mik_shard::Value;
    ///
    /// let params = Value::params_from_json_str("[10, 20.0, \"x\"]").unwrap();
    /// assert_eq!(params.len(), 3);
    /// assert_eq!(params[0], Value::Int(10));
    /// ```
    pub fn params_from_json_str(json_str: &str) -> Result<Vec<Self>, PaginationError> {
        let json: JsonValue = miniserde::json::from_str(json_str)
            .map_err(|_| PaginationError::InvalidParameterList)?;
        match json {
            JsonValue::Array(arr) => Ok(arr.iter().map(Self::from_json).collect()),
            _ => Err(PaginationError::InvalidParameterList),
        }
    }

    /// Parse a positional parameter list from raw JSON bytes.
    pub fn params_from_json_bytes(bytes: &[u8]) -> Result<Vec<Self>, PaginationError> {
        let s = std::str::from_utf8(bytes).map_err(|_| PaginationError::InvalidParameterList)?;
        Self::params_from_json_str(s)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
