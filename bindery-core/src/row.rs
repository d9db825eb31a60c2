use crate::{AsValue, Context, Error, Result, Value};
use std::sync::Arc;

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(names: RowNames, values: Row) -> Self {
        Self {
            labels: names,
            values,
        }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values()[i])
    }
    /// Value of the field at `field`, failing when the row is shorter.
    pub fn value(&self, field: usize) -> Result<&Value> {
        self.values.get(field).ok_or_else(|| {
            Error::msg(format!(
                "Field {field} is out of range, the row has only {} fields",
                self.values.len()
            ))
        })
    }
    /// Decode the field at `field` into `T`.
    pub fn get<T: AsValue>(&self, field: usize) -> Result<T> {
        let value = self.value(field)?.clone();
        T::try_from_value(value).with_context(|| {
            format!(
                "While decoding the field `{}`",
                self.labels.get(field).map(String::as_str).unwrap_or_default()
            )
        })
    }
    pub fn is_null(&self, field: usize) -> Result<bool> {
        Ok(self.value(field)?.is_null())
    }
    /// Size in bytes of the field data.
    pub fn data_size(&self, field: usize) -> Result<usize> {
        Ok(self.value(field)?.data_size())
    }
    /// Borrow a textual field, `None` when NULL.
    pub fn get_str(&self, field: usize) -> Result<Option<&str>> {
        match self.value(field)? {
            Value::Varchar(Some(v)) => Ok(Some(v.as_str())),
            Value::Blob(Some(v)) => str::from_utf8(v).map(Some).map_err(|e| {
                Error::new(e).context(format!("Field {field} does not contain valid UTF-8"))
            }),
            v if v.is_null() => Ok(None),
            v => Err(Error::msg(format!(
                "Field {field} contains {v:?}, which cannot be borrowed as a string"
            ))),
        }
    }
    /// Borrow a binary or textual field, `None` when NULL.
    pub fn get_bytes(&self, field: usize) -> Result<Option<&[u8]>> {
        match self.value(field)? {
            Value::Blob(Some(v)) => Ok(Some(&v[..])),
            Value::Varchar(Some(v)) => Ok(Some(v.as_bytes())),
            v if v.is_null() => Ok(None),
            v => Err(Error::msg(format!(
                "Field {field} contains {v:?}, which cannot be borrowed as bytes"
            ))),
        }
    }
}

impl From<RowLabeled> for Row {
    fn from(value: RowLabeled) -> Self {
        value.values
    }
}

impl<'a> From<&'a RowLabeled> for &'a Row {
    fn from(value: &'a RowLabeled) -> Self {
        &value.values
    }
}
