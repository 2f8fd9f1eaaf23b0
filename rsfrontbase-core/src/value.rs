//! Values projected out of result rows

use std::fmt;

use crate::{Datatype, FbsError};

/// Reference to a BLOB stored by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    /// Handle string, usable as a column value
    pub handle: String,
    /// Size in bytes of the BLOB contents
    pub size: u32,
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Column data
pub enum Value {
    Boolean(bool),

    /// Tiny, small, regular and long integers, and primary keys
    Integer(i64),

    /// Float, real, double, numeric and day time values
    Float(f64),

    Decimal {
        value: f64,
        scale: i64,
    },

    Text(String),

    Blob(BlobRef),

    /// Seconds since 2001-01-01 00:00:00 UTC
    Timestamp(f64),

    Bits(Vec<u8>),

    /// Contents of a new BLOB, written to the database when bound as a parameter
    Binary(Vec<u8>),

    Null,
}

impl Value {
    /// Returns `true` if the value is `NULL`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Representative datatype of the value
    pub fn datatype(&self) -> Datatype {
        match self {
            Value::Boolean(_) => Datatype::Boolean,
            Value::Integer(_) => Datatype::LongInteger,
            Value::Float(_) => Datatype::Double,
            Value::Decimal { .. } => Datatype::Decimal,
            Value::Text(_) => Datatype::VCharacter,
            Value::Blob(_) => Datatype::BLOB,
            Value::Timestamp(_) => Datatype::Timestamp,
            Value::Bits(_) => Datatype::VBit,
            Value::Binary(_) => Datatype::BLOB,
            Value::Null => Datatype::Undecided,
        }
    }

    /// Render the value as a sql literal
    pub fn sql_literal(&self) -> Result<String, FbsError> {
        Ok(match self {
            Value::Boolean(true) => "TRUE".to_string(),
            Value::Boolean(false) => "FALSE".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Decimal { .. } => self.to_string(),
            Value::Text(t) => format!("'{}'", t.replace('\'', "''")),
            Value::Blob(blob) => blob.handle.clone(),
            Value::Bits(bits) => format!("X'{}'", hex_upper(bits)),
            Value::Null => "null".to_string(),

            Value::Binary(_) => {
                return Err("BLOB contents must be written to a handle before use in sql".into())
            }

            #[cfg(feature = "date_time")]
            Value::Timestamp(seconds) => format!(
                "TIMESTAMP '{}'",
                crate::date_time::format_timestamp(crate::date_time::decode_timestamp(*seconds)?)
            ),

            #[cfg(not(feature = "date_time"))]
            Value::Timestamp(_) => {
                return Err("Enable the `date_time` feature to render Timestamp values".into())
            }
        })
    }
}

fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal { value, scale } => {
                write!(f, "{:.*}", (*scale).max(0) as usize, value)
            }
            Value::Text(t) => write!(f, "\"{}\"", t),
            Value::Blob(blob) => write!(f, "{}", blob),
            Value::Timestamp(seconds) => write!(f, "{}", seconds),
            Value::Bits(bits) => write!(f, "X'{}'", hex_upper(bits)),
            Value::Binary(data) => write!(f, "BLOB({} bytes)", data.len()),
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<BlobRef> for Value {
    fn from(v: BlobRef) -> Self {
        Value::Blob(v)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(v: Option<T>) -> Self {
        v.map(Value::from).unwrap_or(Value::Null)
    }
}
