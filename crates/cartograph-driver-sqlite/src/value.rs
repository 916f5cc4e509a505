use cartograph_core::stmt::Value as CoreValue;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Bridges core values and SQLite storage classes.
#[derive(Debug)]
pub struct Value(CoreValue);

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }
}

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(v) => CoreValue::I64(v),
            ValueRef::Real(v) => CoreValue::F64(v),
            ValueRef::Text(v) => CoreValue::String(
                std::str::from_utf8(v)
                    .map_err(|err| FromSqlError::Other(Box::new(err)))?
                    .to_string(),
            ),
            ValueRef::Blob(_) => return Err(FromSqlError::InvalidType),
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use rusqlite::types::Value as SqlValue;

        match &self.0 {
            CoreValue::Bool(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(i64::from(*v)))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.format(DATE_TIME_FORMAT).to_string(),
            ))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            value @ (CoreValue::List(_) | CoreValue::Map(_)) => {
                Err(rusqlite::Error::ToSqlConversionFailure(
                    format!("{} values cannot be bound", value.variant_name()).into(),
                ))
            }
        }
    }
}
