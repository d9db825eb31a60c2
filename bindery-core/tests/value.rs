#[cfg(test)]
mod tests {
    use bindery_core::{AsValue, Value, format_timestamp};
    use time::{Duration, PrimitiveDateTime, macros::datetime};

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
        assert!(Value::Int32(None).same_type(&Value::Int32(Some(5))));
        assert!(!Value::Int32(None).same_type(&Value::Int64(None)));
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(None));
        assert_eq!(bool::try_from_value(val).unwrap(), true);
        assert_eq!(bool::try_from_value(0i32.into()).unwrap(), false);
        assert_eq!(bool::try_from_value(9u64.into()).unwrap(), true);
        assert_eq!(bool::try_from_value("TRUE".into()).unwrap(), true);
        assert!(bool::try_from_value(0.5f32.into()).is_err());
    }

    #[test]
    fn value_i32() {
        let val: Value = (-7i32).into();
        assert_eq!(val, Value::Int32(Some(-7)));
        assert_eq!(i32::try_from_value(val).unwrap(), -7);
        assert_eq!(i32::try_from_value(Value::Int64(Some(-7))).unwrap(), -7);
        assert_eq!(i32::try_from_value(Value::UInt64(Some(9))).unwrap(), 9);
        assert_eq!(i32::try_from_value(" 12 ".into()).unwrap(), 12);
        assert_eq!(i32::try_from_value(b"34".as_slice().into()).unwrap(), 34);
        assert!(i32::try_from_value(Value::Int64(Some(i64::MAX))).is_err());
        assert!(i32::try_from_value(Value::UInt32(Some(u32::MAX))).is_err());
        assert!(i32::try_from_value(0.1f64.into()).is_err());
        assert!(i32::try_from_value("twelve".into()).is_err());
    }

    #[test]
    fn value_u32() {
        let val: Value = u32::MAX.into();
        assert_eq!(val, Value::UInt32(Some(u32::MAX)));
        assert_eq!(u32::try_from_value(val).unwrap(), u32::MAX);
        assert_eq!(u32::try_from_value(Value::Int64(Some(5))).unwrap(), 5);
        assert!(u32::try_from_value(Value::Int32(Some(-1))).is_err());
        assert!(u32::try_from_value(Value::Int64(Some(-1))).is_err());
        assert!(u32::try_from_value(Value::UInt64(Some(u64::MAX))).is_err());
    }

    #[test]
    fn value_64_bits() {
        assert_eq!(i64::try_from_value(Value::Int32(Some(-1))).unwrap(), -1);
        assert_eq!(i64::try_from_value(Value::UInt32(Some(1))).unwrap(), 1);
        assert!(i64::try_from_value(Value::UInt64(Some(u64::MAX))).is_err());
        assert_eq!(
            u64::try_from_value(Value::UInt64(Some(u64::MAX))).unwrap(),
            u64::MAX
        );
        assert_eq!(u64::try_from_value(Value::Int64(Some(3))).unwrap(), 3);
        assert!(u64::try_from_value(Value::Int64(Some(-3))).is_err());
    }

    #[test]
    fn value_float() {
        let val: Value = 0.5f32.into();
        assert_eq!(val, Value::Float32(Some(0.5)));
        assert_eq!(f64::try_from_value(val).unwrap(), 0.5);
        assert_eq!(f32::try_from_value(Value::Float64(Some(2.25))).unwrap(), 2.25);
        assert_eq!(f64::try_from_value(Value::Int64(Some(-4))).unwrap(), -4.0);
        assert_eq!(f32::try_from_value("1.5".into()).unwrap(), 1.5);
        assert!(f32::try_from_value(Value::Boolean(Some(true))).is_err());
    }

    #[test]
    fn value_string() {
        let val: Value = String::from("hello").into();
        assert_eq!(val, Value::Varchar(Some("hello".into())));
        assert_eq!(String::try_from_value(val).unwrap(), "hello");
        assert_eq!(
            String::try_from_value(b"bytes".as_slice().into()).unwrap(),
            "bytes"
        );
        assert_eq!(String::try_from_value(Value::Int64(Some(42))).unwrap(), "42");
        assert!(String::try_from_value(Value::Blob(Some([0xff, 0xfe].into()))).is_err());
    }

    #[test]
    fn value_blob() {
        let val: Value = vec![1u8, 2, 3].into();
        assert_eq!(val, Value::Blob(Some([1, 2, 3].into())));
        assert_eq!(val.data_size(), 3);
        assert_eq!(Vec::<u8>::try_from_value(val).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            Box::<[u8]>::try_from_value("ab".into()).unwrap(),
            Box::<[u8]>::from(&b"ab"[..])
        );
        assert!(Vec::<u8>::try_from_value(Value::Int32(Some(1))).is_err());
    }

    #[test]
    fn value_option() {
        assert_eq!(Option::<i32>::None.as_value(), Value::Int32(None));
        assert_eq!(Some(5i64).as_value(), Value::Int64(Some(5)));
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::try_from_value(Value::Varchar(None)).unwrap(),
            None
        );
        assert_eq!(
            Option::<i32>::try_from_value(Value::Int32(Some(3))).unwrap(),
            Some(3)
        );
        assert_eq!(Value::Int64(None).data_size(), 0);
    }

    #[test]
    fn value_timestamp() {
        let timestamp = datetime!(2025-10-19 23:59:58.000123);
        assert_eq!(
            format_timestamp(&timestamp).unwrap(),
            "2025-10-19 23:59:58.000123"
        );
        assert_eq!(
            PrimitiveDateTime::try_from_value("2025-10-19 23:59:58.000123".into()).unwrap(),
            timestamp
        );
        assert_eq!(
            PrimitiveDateTime::try_from_value("2025-10-19 23:59:58".into()).unwrap(),
            datetime!(2025-10-19 23:59:58)
        );
        assert_eq!(
            String::try_from_value(timestamp.as_value()).unwrap(),
            "2025-10-19 23:59:58.000123"
        );
        assert!(PrimitiveDateTime::try_from_value("yesterday".into()).is_err());
    }

    #[test]
    fn value_interval() {
        let val = Duration::minutes(90).as_value();
        assert_eq!(val, Value::Interval(Some(Duration::minutes(90))));
        assert_eq!(Duration::try_from_value(val).unwrap(), Duration::minutes(90));
        assert!(Duration::try_from_value(Value::Int64(Some(1))).is_err());
    }
}
