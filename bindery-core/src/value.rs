use std::mem;
use time::{Duration, PrimitiveDateTime};

/// Dynamically typed value exchanged with the drivers.
///
/// Every variant but `Null` carries an `Option`, `None` being a typed NULL
/// (for example the empty value of an `Option<i32>`).
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Timestamp(Option<PrimitiveDateTime>),
    Interval(Option<Duration>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null
            | Value::Boolean(None)
            | Value::Int32(None)
            | Value::Int64(None)
            | Value::UInt32(None)
            | Value::UInt64(None)
            | Value::Float32(None)
            | Value::Float64(None)
            | Value::Varchar(None)
            | Value::Blob(None)
            | Value::Timestamp(None)
            | Value::Interval(None) => true,
            _ => false,
        }
    }

    pub fn same_type(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Size in bytes of the payload, 0 for NULL values.
    pub fn data_size(&self) -> usize {
        match self {
            Value::Boolean(Some(..)) => mem::size_of::<bool>(),
            Value::Int32(Some(..)) => mem::size_of::<i32>(),
            Value::Int64(Some(..)) => mem::size_of::<i64>(),
            Value::UInt32(Some(..)) => mem::size_of::<u32>(),
            Value::UInt64(Some(..)) => mem::size_of::<u64>(),
            Value::Float32(Some(..)) => mem::size_of::<f32>(),
            Value::Float64(Some(..)) => mem::size_of::<f64>(),
            Value::Varchar(Some(v)) => v.len(),
            Value::Blob(Some(v)) => v.len(),
            Value::Timestamp(Some(..)) => mem::size_of::<PrimitiveDateTime>(),
            Value::Interval(Some(..)) => mem::size_of::<Duration>(),
            _ => 0,
        }
    }
}
