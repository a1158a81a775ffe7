//! Loosely typed input values.
//!
//! Ingestion sources (CSV cells, JSON fields) hand over values whose kind is
//! only known at runtime. `RawValue` carries them to the validation boundary,
//! where everything non-numeric is rejected with its kind name.

/// A single input cell of runtime-determined kind.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Float(f64),
    Int(i64),
    Text(String),
    Bool(bool),
    Null,
}

impl RawValue {
    /// Kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Float(_) => "float",
            RawValue::Int(_) => "integer",
            RawValue::Text(_) => "text",
            RawValue::Bool(_) => "boolean",
            RawValue::Null => "null",
        }
    }

    /// Numeric view of the value, if it has one.
    ///
    /// Integers convert via `as f64`; `Text`, `Bool` and `Null` have no
    /// numeric view even when a human could read one into them.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            RawValue::Float(v) => Some(v),
            RawValue::Int(v) => Some(v as f64),
            _ => None,
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Float(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Int(v)
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(RawValue::Float(0.1).kind(), "float");
        assert_eq!(RawValue::Int(3).kind(), "integer");
        assert_eq!(RawValue::from("0.2").kind(), "text");
        assert_eq!(RawValue::Bool(true).kind(), "boolean");
        assert_eq!(RawValue::Null.kind(), "null");
    }

    #[test]
    fn numeric_kinds_coerce() {
        assert_eq!(RawValue::Float(0.05).as_f64(), Some(0.05));
        assert_eq!(RawValue::Int(2).as_f64(), Some(2.0));
    }

    #[test]
    fn non_numeric_kinds_do_not_coerce() {
        assert_eq!(RawValue::from("0.05").as_f64(), None);
        assert_eq!(RawValue::Bool(true).as_f64(), None);
        assert_eq!(RawValue::Null.as_f64(), None);
    }
}
