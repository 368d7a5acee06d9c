use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};
use sqlsplit_core::stmt::Value as CoreValue;

/// A core value adapted for binding to a SQLite statement.
#[derive(Debug)]
pub(crate) struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts a SQLite column value into a core value.
    pub(crate) fn from_sql(value: SqlValue) -> CoreValue {
        match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => CoreValue::I64(value),
            SqlValue::Real(value) => CoreValue::F64(value),
            SqlValue::Text(value) => CoreValue::String(value),
            SqlValue::Blob(value) => CoreValue::Bytes(value),
        }
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(value) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*value))),
            CoreValue::F64(value) => Ok(ToSqlOutput::Owned(SqlValue::Real(*value))),
            CoreValue::String(value) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes()))),
            CoreValue::Bytes(value) => Ok(ToSqlOutput::Borrowed(ValueRef::Blob(&value[..]))),
            CoreValue::List(_) | CoreValue::Record(_) => {
                Err(rusqlite::Error::ToSqlConversionFailure(
                    format!("cannot bind composite value as a parameter: {:?}", self.0).into(),
                ))
            }
        }
    }
}
