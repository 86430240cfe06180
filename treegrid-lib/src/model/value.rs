//! Value enum for dynamic cell values

use chrono::DateTime;
use chrono::SecondsFormat;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// A dynamic value that can appear in a record field.
///
/// Records store their fields as `HashMap<String, Value>`, so any column can
/// hold any of these shapes. Filtering and sorting coerce values on demand
/// via [`Value::as_number`] and [`Value::normalize`] rather than failing on
/// unexpected shapes.
///
/// # Example
///
/// ```
/// use treegrid_lib::model::Value;
///
/// let name = Value::from("Pale Ale");
/// let price = Value::from(4.5);
/// let empty = Value::Null;
///
/// assert_eq!(price.as_number(), Some(4.5));
/// assert_eq!(empty.normalize(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// String value.
    String(String),
    /// Fallback for unrecognized JSON values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::DateTime(_) => "datetime",
            Value::String(_) => "string",
            Value::Json(_) => "json",
        }
    }

    /// Normalizes the value to its canonical string form.
    ///
    /// Null becomes the empty string, numbers use their shortest display
    /// form (`10`, not `10.0`), and datetimes become ISO-8601 with
    /// millisecond precision and a `Z` suffix. The date filter's prefix
    /// match and the text filter's substring match both run against this
    /// form.
    pub fn normalize(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            Value::String(s) => s.clone(),
            Value::Json(v) => match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        }
    }

    /// Coerces the value to a number, if possible.
    ///
    /// Strings are trimmed and parsed; blank or non-numeric strings yield
    /// `None`. Booleans coerce to `1`/`0`. Datetimes do not coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Decimal(d) => d.to_f64(),
            Value::DateTime(_) => None,
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse().ok()
                }
            }
            Value::Json(v) => v.as_f64(),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whole_float() {
        assert_eq!(Value::Float(10.0).normalize(), "10");
        assert_eq!(Value::Float(4.5).normalize(), "4.5");
    }

    #[test]
    fn test_normalize_null_is_empty() {
        assert_eq!(Value::Null.normalize(), "");
    }

    #[test]
    fn test_normalize_datetime_is_iso() {
        let dt: DateTime<Utc> = "2024-03-01T12:30:00Z".parse().unwrap();
        assert_eq!(Value::DateTime(dt).normalize(), "2024-03-01T12:30:00.000Z");
    }

    #[test]
    fn test_as_number_from_string() {
        assert_eq!(Value::from("10").as_number(), Some(10.0));
        assert_eq!(Value::from(" 4.5 ").as_number(), Some(4.5));
        assert_eq!(Value::from("abc").as_number(), None);
        assert_eq!(Value::from("").as_number(), None);
    }

    #[test]
    fn test_as_number_from_bool() {
        assert_eq!(Value::Bool(true).as_number(), Some(1.0));
        assert_eq!(Value::Bool(false).as_number(), Some(0.0));
    }
}
