use crate::{Error, Result, Value, truncate_long};
use std::any;
use time::{Duration, PrimitiveDateTime, macros::format_description};

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// used for query parameters and row decoding.
///
/// # Error semantics
/// - Numeric conversions check the range before returning, the error message
///   names both the offending value and the target type.
/// - `Value::Varchar` is parsed as a fallback, so numbers returned as text by
///   the server still convert.
///
/// # Examples
/// ```rust
/// use bindery_core::{AsValue, Value};
/// let v = 42i32.as_value();
/// assert!(matches!(v, Value::Int32(Some(42))));
/// let n: i32 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// The NULL-like variant for this type.
    fn as_empty_value() -> Value;
    /// Convert this value into its owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Attempt to convert a dynamic [`Value`] into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(Some(value.into()))
    }
}

fn parse_text<T: std::str::FromStr>(value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        Error::msg(format!(
            "Cannot parse `{}` as {}",
            truncate_long!(value),
            any::type_name::<T>()
        ))
    })
}

fn from_text_bytes(value: &[u8]) -> Result<&str> {
    str::from_utf8(value).map_err(|e| {
        Error::new(e).context(format!(
            "Cannot convert a blob of {} bytes into a UTF-8 string",
            value.len()
        ))
    })
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self as _))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v as _),
                    $($pat_rest => $expr_rest,)*
                    #[allow(unreachable_patterns)]
                    Value::Int64(Some(v)) => {
                        if (v as i128).clamp(<$source>::MIN as _, <$source>::MAX as _) != v as i128 {
                            return Err(Error::msg(format!(
                                "Value {v}: i64 is out of range for {}",
                                any::type_name::<Self>(),
                            )));
                        }
                        Ok(v as $source)
                    }
                    #[allow(unreachable_patterns)]
                    Value::UInt64(Some(v)) => {
                        if (v as i128).clamp(<$source>::MIN as _, <$source>::MAX as _) != v as i128 {
                            return Err(Error::msg(format!(
                                "Value {v}: u64 is out of range for {}",
                                any::type_name::<Self>(),
                            )));
                        }
                        Ok(v as $source)
                    }
                    Value::Varchar(Some(ref v)) => parse_text(v),
                    Value::Blob(Some(ref v)) => parse_text(from_text_bytes(v)?),
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(
    i32,
    Value::Int32,
    Value::UInt32(Some(v)) => {
        i32::try_from(v).map_err(|_| Error::msg(format!("Value {v}: u32 is out of range for i32")))
    },
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    i64,
    Value::Int64,
    Value::Int32(Some(v)) => Ok(v as _),
    Value::UInt32(Some(v)) => Ok(v as _),
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    u32,
    Value::UInt32,
    Value::Int32(Some(v)) => {
        u32::try_from(v).map_err(|_| Error::msg(format!("Value {v}: i32 is out of range for u32")))
    },
    Value::Boolean(Some(v)) => Ok(v as _),
);
impl_as_value!(
    u64,
    Value::UInt64,
    Value::UInt32(Some(v)) => Ok(v as _),
    Value::Int32(Some(v)) => {
        u64::try_from(v).map_err(|_| Error::msg(format!("Value {v}: i32 is out of range for u64")))
    },
    Value::Boolean(Some(v)) => Ok(v as _),
);

macro_rules! impl_as_value_float {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v)) => Ok(v),
                    $($pat_rest => $expr_rest,)*
                    Value::Int32(Some(v)) => Ok(v as _),
                    Value::Int64(Some(v)) => Ok(v as _),
                    Value::UInt32(Some(v)) => Ok(v as _),
                    Value::UInt64(Some(v)) => Ok(v as _),
                    Value::Varchar(Some(ref v)) => parse_text(v),
                    Value::Blob(Some(ref v)) => parse_text(from_text_bytes(v)?),
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value_float!(
    f32,
    Value::Float32,
    Value::Float64(Some(v)) => Ok(v as _),
);
impl_as_value_float!(
    f64,
    Value::Float64,
    Value::Float32(Some(v)) => Ok(v as _),
);

impl AsValue for bool {
    fn as_empty_value() -> Value {
        Value::Boolean(None)
    }
    fn as_value(self) -> Value {
        Value::Boolean(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(Some(v)) => Ok(v),
            Value::Int32(Some(v)) => Ok(v != 0),
            Value::Int64(Some(v)) => Ok(v != 0),
            Value::UInt32(Some(v)) => Ok(v != 0),
            Value::UInt64(Some(v)) => Ok(v != 0),
            Value::Varchar(Some(ref v)) => match v.trim() {
                "true" | "TRUE" | "1" => Ok(true),
                "false" | "FALSE" | "0" => Ok(false),
                _ => Err(Error::msg(format!(
                    "Cannot parse `{}` as bool",
                    truncate_long!(v)
                ))),
            },
            _ => Err(Error::msg(format!("Cannot convert {value:?} to bool"))),
        }
    }
}

impl AsValue for String {
    fn as_empty_value() -> Value {
        Value::Varchar(None)
    }
    fn as_value(self) -> Value {
        Value::Varchar(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Varchar(Some(v)) => Ok(v),
            Value::Blob(Some(v)) => Ok(from_text_bytes(&v)?.to_owned()),
            Value::Boolean(Some(v)) => Ok(v.to_string()),
            Value::Int32(Some(v)) => Ok(v.to_string()),
            Value::Int64(Some(v)) => Ok(v.to_string()),
            Value::UInt32(Some(v)) => Ok(v.to_string()),
            Value::UInt64(Some(v)) => Ok(v.to_string()),
            Value::Float32(Some(v)) => Ok(v.to_string()),
            Value::Float64(Some(v)) => Ok(v.to_string()),
            Value::Timestamp(Some(v)) => format_timestamp(&v),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to String"))),
        }
    }
}

impl AsValue for Box<[u8]> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Blob(Some(v)) => Ok(v),
            Value::Varchar(Some(v)) => Ok(v.into_bytes().into_boxed_slice()),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to Box<[u8]>"))),
        }
    }
}

impl AsValue for Vec<u8> {
    fn as_empty_value() -> Value {
        Value::Blob(None)
    }
    fn as_value(self) -> Value {
        Value::Blob(Some(self.into_boxed_slice()))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Box::<[u8]>::try_from_value(value).map(Into::into)
    }
}

impl AsValue for PrimitiveDateTime {
    fn as_empty_value() -> Value {
        Value::Timestamp(None)
    }
    fn as_value(self) -> Value {
        Value::Timestamp(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(Some(v)) => Ok(v),
            Value::Varchar(Some(ref v)) => parse_timestamp(v),
            _ => Err(Error::msg(format!(
                "Cannot convert {value:?} to PrimitiveDateTime"
            ))),
        }
    }
}

impl AsValue for Duration {
    fn as_empty_value() -> Value {
        Value::Interval(None)
    }
    fn as_value(self) -> Value {
        Value::Interval(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Interval(Some(v)) => Ok(v),
            _ => Err(Error::msg(format!("Cannot convert {value:?} to Duration"))),
        }
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::try_from_value(value).map(Some)
    }
}

/// Render a timestamp the way MySQL reads `DATETIME` literals.
pub fn format_timestamp(value: &PrimitiveDateTime) -> Result<String> {
    value
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
        ))
        .map_err(|e| Error::new(e).context(format!("Cannot format the timestamp {value}")))
}

fn parse_timestamp(value: &str) -> Result<PrimitiveDateTime> {
    let input = value.trim();
    PrimitiveDateTime::parse(
        input,
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
    )
    .or_else(|_| {
        PrimitiveDateTime::parse(
            input,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
    })
    .map_err(|e| {
        Error::new(e).context(format!(
            "Cannot parse `{}` as PrimitiveDateTime",
            truncate_long!(value)
        ))
    })
}
