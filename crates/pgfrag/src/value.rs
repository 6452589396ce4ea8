//! Scalar bind values.
//!
//! [`Value`] is the closed set of scalars a fragment can bind. It implements
//! [`ToSql`] by delegating to the wrapped scalar, so a compiled value list
//! can be handed straight to a tokio-postgres query method.

use bytes::BytesMut;
use std::cmp::Ordering;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

/// A scalar bind value.
///
/// `Null` is a legitimate bind value (e.g. `SET col = $1` with NULL), distinct
/// from an absent field, which never reaches a `Value` at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    /// BOOLEAN
    Bool(bool),
    /// BIGINT
    Int(i64),
    /// DOUBLE PRECISION
    Float(f64),
    /// TEXT
    Text(String),
}

impl Value {
    /// Whether this value is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Compare two values where a meaningful ordering exists.
    ///
    /// Integers and floats compare numerically (across the two shapes), text
    /// compares lexically. Every other pairing (null, bool, mixed
    /// text/number) has no defined ordering and returns `None`; range
    /// validation treats that as "no check".
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql(ty, out),
            Value::Int(v) => v.to_sql(ty, out),
            Value::Float(v) => v.to_sql(ty, out),
            Value::Text(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        // The variant is only known at bind time and `Null` must bind to any
        // column type; type agreement is checked by the server.
        true
    }

    to_sql_checked!();
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_ints() {
        assert_eq!(
            Value::Int(10).compare(&Value::Int(5)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::Int(5).compare(&Value::Int(5)), Some(Ordering::Equal));
    }

    #[test]
    fn compare_mixed_numeric() {
        assert_eq!(
            Value::Int(1).compare(&Value::Float(1.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Float(2.0).compare(&Value::Int(2)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn compare_text() {
        assert_eq!(
            Value::from("b").compare(&Value::from("a")),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn incomparable_pairs_have_no_ordering() {
        assert_eq!(Value::Null.compare(&Value::Int(1)), None);
        assert_eq!(Value::Bool(true).compare(&Value::Bool(false)), None);
        assert_eq!(Value::from("10").compare(&Value::Int(5)), None);
    }

    #[test]
    fn option_maps_to_null() {
        let v: Value = Option::<i64>::None.into();
        assert!(v.is_null());
        let v: Value = Some("x").into();
        assert_eq!(v, Value::from("x"));
    }
}
