use crate::Param;
use bindery_core::Value;
use time::{Date, Duration, Month, PrimitiveDateTime, Time};

pub(crate) struct ValueWrap(pub(crate) Value);

impl From<Value> for ValueWrap {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
impl From<ValueWrap> for Value {
    fn from(value: ValueWrap) -> Self {
        value.0
    }
}

impl mysql_async::prelude::FromValue for ValueWrap {
    type Intermediate = ValueWrap;
}

impl TryFrom<mysql_async::Value> for ValueWrap {
    type Error = mysql_async::FromValueError;
    fn try_from(value: mysql_async::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            mysql_async::Value::NULL => Value::Null,
            mysql_async::Value::Bytes(v) => Value::Blob(Some(v.into())),
            mysql_async::Value::Int(v) => Value::Int64(Some(v)),
            mysql_async::Value::UInt(v) => Value::UInt64(Some(v)),
            mysql_async::Value::Float(v) => Value::Float32(Some(v)),
            mysql_async::Value::Double(v) => Value::Float64(Some(v)),
            mysql_async::Value::Date(year, month, day, hour, minute, second, microsecond) => {
                let invalid = || {
                    mysql_async::FromValueError(mysql_async::Value::Date(
                        year,
                        month,
                        day,
                        hour,
                        minute,
                        second,
                        microsecond,
                    ))
                };
                let month = Month::try_from(month).map_err(|_| invalid())?;
                Value::Timestamp(Some(PrimitiveDateTime::new(
                    Date::from_calendar_date(year as _, month, day).map_err(|_| invalid())?,
                    Time::from_hms_micro(hour, minute, second, microsecond)
                        .map_err(|_| invalid())?,
                )))
            }
            mysql_async::Value::Time(negative, days, hours, minutes, seconds, micro) => {
                let mut result = Duration::days(days as _)
                    + Duration::hours(hours as _)
                    + Duration::minutes(minutes as _)
                    + Duration::seconds(seconds as _)
                    + Duration::microseconds(micro as _);
                if negative {
                    result = -result;
                }
                Value::Interval(Some(result))
            }
        }
        .into())
    }
}

impl From<Param<'_>> for mysql_async::Value {
    fn from(value: Param<'_>) -> Self {
        match value {
            Param::Null => mysql_async::Value::NULL,
            Param::Int {
                value,
                unsigned: false,
            } => mysql_async::Value::Int(value as _),
            Param::Int {
                value,
                unsigned: true,
            } => mysql_async::Value::UInt(value as u32 as _),
            Param::Float(v) => mysql_async::Value::Float(v),
            Param::String(v) | Param::Blob(v) => mysql_async::Value::Bytes(v.to_vec()),
        }
    }
}
