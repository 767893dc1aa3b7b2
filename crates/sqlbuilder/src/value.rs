//! Literal values and the single place where literal quoting is decided.
//!
//! Every operation that inlines a value into command text (`insert`, `equal_to`,
//! `not_equal_to`, `in_list`) goes through [`format_literal`]:
//!
//! - integers (`SmallInt`, `Int`, `BigInt`) are rendered bare: `42`
//! - everything else is wrapped in single quotes: `'alice'`
//!
//! Embedded quote characters are **not** escaped. `format_literal(&"O'Brien".into())`
//! yields `'O'Brien'`; callers comparing exact strings depend on this, so it stays.

use bytes::BytesMut;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use tokio_postgres::types::{IsNull, ToSql, Type};
use uuid::Uuid;

/// A value that can be inlined as a literal or bound as a parameter.
///
/// Serialized untagged, so bindings can be read from plain JSON (`5`, `"x"`, `null`).
/// Strings always deserialize as [`Value::Text`]; `SmallInt` and `Real` are never
/// produced from JSON since `Int` and `Float` match first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    BigInt(i64),
    Float(f64),
    SmallInt(i16),
    Real(f32),
    Text(String),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

impl Value {
    /// Whether the value is rendered without quotes.
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::SmallInt(_) | Value::Int(_) | Value::BigInt(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Display text of the value, unquoted. `Null` displays as the empty string and
/// booleans as `True` / `False`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(v) => write!(f, "{v}"),
            Value::BigInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::SmallInt(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Uuid(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{v}"),
            Value::Timestamp(v) => write!(f, "{v}"),
            Value::TimestampTz(v) => write!(f, "{v}"),
        }
    }
}

/// Render a value as an inline SQL literal.
pub fn format_literal(value: &Value) -> String {
    if value.is_integer() {
        value.to_string()
    } else {
        format!("'{value}'")
    }
}

/// Render a comma-joined literal list (no spaces), as used by `in_list` and `insert`.
pub(crate) fn format_literal_list<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    values
        .into_iter()
        .map(|v| format_literal(&v.into()))
        .collect::<Vec<_>>()
        .join(",")
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    f32 => Real,
    f64 => Float,
    String => Text,
    &str => Text,
    &String => Text,
    Uuid => Uuid,
    NaiveDate => Date,
    NaiveDateTime => Timestamp,
    DateTime<Utc> => TimestampTz,
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

/// Values encode as the wrapped scalar, so parameters can be handed straight to
/// a tokio-postgres client. Type checking is deferred to the wrapped scalar.
impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql(ty, out),
            Value::Int(v) => v.to_sql(ty, out),
            Value::BigInt(v) => v.to_sql(ty, out),
            Value::Float(v) => v.to_sql(ty, out),
            Value::SmallInt(v) => v.to_sql(ty, out),
            Value::Real(v) => v.to_sql(ty, out),
            Value::Text(v) => v.to_sql(ty, out),
            Value::Uuid(v) => v.to_sql(ty, out),
            Value::Date(v) => v.to_sql(ty, out),
            Value::Timestamp(v) => v.to_sql(ty, out),
            Value::TimestampTz(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn to_sql_checked(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => v.to_sql_checked(ty, out),
            Value::Int(v) => v.to_sql_checked(ty, out),
            Value::BigInt(v) => v.to_sql_checked(ty, out),
            Value::Float(v) => v.to_sql_checked(ty, out),
            Value::SmallInt(v) => v.to_sql_checked(ty, out),
            Value::Real(v) => v.to_sql_checked(ty, out),
            Value::Text(v) => v.to_sql_checked(ty, out),
            Value::Uuid(v) => v.to_sql_checked(ty, out),
            Value::Date(v) => v.to_sql_checked(ty, out),
            Value::Timestamp(v) => v.to_sql_checked(ty, out),
            Value::TimestampTz(v) => v.to_sql_checked(ty, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_bare() {
        assert_eq!(format_literal(&Value::from(42)), "42");
        assert_eq!(format_literal(&Value::from(-7_i64)), "-7");
        assert_eq!(format_literal(&Value::from(3_i16)), "3");
    }

    #[test]
    fn everything_else_is_single_quoted() {
        assert_eq!(format_literal(&Value::from("alice")), "'alice'");
        assert_eq!(format_literal(&Value::from(true)), "'True'");
        assert_eq!(format_literal(&Value::from(false)), "'False'");
        assert_eq!(format_literal(&Value::from(1.5)), "'1.5'");

        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(format_literal(&Value::from(date)), "'2024-01-02'");

        let ts = date.and_hms_opt(3, 4, 5).unwrap();
        assert_eq!(format_literal(&Value::from(ts)), "'2024-01-02 03:04:05'");
    }

    #[test]
    fn narrow_numbers_keep_their_own_text() {
        assert_eq!(Value::from(0.1_f32), Value::Real(0.1));
        assert_eq!(format_literal(&Value::from(0.1_f32)), "'0.1'");
        assert_eq!(Value::from(3_i16), Value::SmallInt(3));
        assert_eq!(format_literal(&Value::from(3_i16)), "3");
    }

    #[test]
    fn embedded_quotes_are_not_escaped() {
        assert_eq!(format_literal(&Value::from("O'Brien")), "'O'Brien'");
    }

    #[test]
    fn null_renders_as_empty_quoted_string() {
        assert_eq!(format_literal(&Value::Null), "''");
        assert_eq!(format_literal(&Value::from(None::<i32>)), "''");
        assert_eq!(format_literal(&Value::from(Some(9))), "9");
    }

    #[test]
    fn literal_list_is_comma_joined_without_spaces() {
        assert_eq!(format_literal_list([1, 2, 3]), "1,2,3");
        assert_eq!(format_literal_list(["a", "b"]), "'a','b'");
        assert_eq!(format_literal_list(Vec::<i32>::new()), "");
    }

    #[test]
    fn deserializes_untagged_json() {
        let values: Vec<Value> = serde_json::from_str(r#"[5, "x", null, true, 1.5, 5000000000]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(5),
                Value::Text("x".to_string()),
                Value::Null,
                Value::Bool(true),
                Value::Float(1.5),
                Value::BigInt(5_000_000_000),
            ]
        );
    }

    #[test]
    fn encodes_wrapped_scalar() {
        let mut buf = BytesMut::new();
        let is_null = Value::Int(7).to_sql_checked(&Type::INT4, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::No));
        assert_eq!(&buf[..], &7_i32.to_be_bytes());

        let mut buf = BytesMut::new();
        assert!(Value::Int(7).to_sql_checked(&Type::TEXT, &mut buf).is_err());

        let mut buf = BytesMut::new();
        Value::from(3_i16).to_sql_checked(&Type::INT2, &mut buf).unwrap();
        assert_eq!(&buf[..], &3_i16.to_be_bytes());

        let mut buf = BytesMut::new();
        Value::from(1.5_f32).to_sql_checked(&Type::FLOAT4, &mut buf).unwrap();
        assert_eq!(&buf[..], &1.5_f32.to_bits().to_be_bytes());

        let mut buf = BytesMut::new();
        let is_null = Value::Null.to_sql_checked(&Type::INT8, &mut buf).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
    }
}
