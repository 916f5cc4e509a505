use super::Record;
use crate::{Error, Result};

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Date and time without a time zone
    DateTime(NaiveDateTime),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values
    List(Vec<Value>),

    /// A nested mapping of field name to value
    Map(Record),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value does not identify anything: `Null` or an
    /// empty string.
    ///
    /// A model whose identifier is unset is new and is inserted on save.
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(v) => v.is_empty(),
            _ => false,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Record> {
        match self {
            Self::Map(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn into_map(self) -> Result<Record> {
        match self {
            Self::Map(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Record")),
        }
    }

    /// The key under which a value identifies a model in an identity map.
    ///
    /// Integers and strings key by their text, so a row loaded with
    /// `I64(5)` is found again by a lookup for `"5"`. Every other variant
    /// is tagged with its type and never collides with them.
    pub fn to_key(&self) -> String {
        match self {
            Self::I64(v) => v.to_string(),
            Self::String(v) => v.clone(),
            value => format!("{}:{value}", value.variant_name()),
        }
    }

    /// Renders the value as an SQL literal. Strings and timestamps are
    /// single-quoted with embedded quotes doubled.
    pub fn quoted(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => "0".to_string(),
            Self::I64(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::List(items) => {
                let items: Vec<_> = items.iter().map(Value::quoted).collect();
                format!("({})", items.join(", "))
            }
            value => format!("'{}'", value.to_string().replace('\'', "''")),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::DateTime(_) => "DateTime",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::List(_) => "List",
            Self::Map(_) => "Map",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
            Self::F64(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                let mut s = "";
                for item in items {
                    write!(f, "{s}{item}")?;
                    s = ", ";
                }
                f.write_str("]")
            }
            Self::Map(record) => {
                f.write_str("{")?;
                let mut s = "";
                for (key, value) in record {
                    write!(f, "{s}{key}: {value}")?;
                    s = ", ";
                }
                f.write_str("}")
            }
            Self::Null => f.write_str("NULL"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::DateTime(src.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

impl From<Record> for Value {
    fn from(src: Record) -> Self {
        Self::Map(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            Value::String(v) => match v.parse() {
                Ok(parsed) => Ok(parsed),
                Err(_) => Err(Error::type_conversion(Value::String(v), "i64")),
            },
            _ => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_string()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}
