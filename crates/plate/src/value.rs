use chrono::{DateTime, NaiveDate, Utc};

/// A query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An array of values of the same type
    Array(Vec<Value>),

    /// Boolean value
    Bool(bool),

    /// Raw bytes
    Bytes(Vec<u8>),

    /// Calendar date without a time zone
    Date(NaiveDate),

    /// 64-bit floating point number
    Float64(f64),

    /// 64-bit signed integer
    Int64(i64),

    /// SQL NULL
    Null,

    /// String value
    String(String),

    /// Instant in time, UTC
    Timestamp(DateTime<Utc>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int64(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int64(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float64(value.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

macro_rules! impl_from_vec {
    ( $( $ty:ty ),* ) => {
        $(
            impl From<Vec<$ty>> for Value {
                fn from(value: Vec<$ty>) -> Self {
                    Value::Array(value.into_iter().map(Value::from).collect())
                }
            }
        )*
    };
}

impl_from_vec!(String, i64, f64, bool, DateTime<Utc>, NaiveDate, Vec<u8>);
