use crate::{AsValue, DriverError, Error, Result, ResultSet, Value, format_timestamp};

/// A statement compiled by the server, with its positional parameters.
///
/// # Binding Semantics
/// * Parameters are addressed by position, from 0 up to `param_count() - 1`.
///   Binding outside that range fails and leaves the bindings untouched.
/// * `bind_string` and `bind_blob` copy the payload into storage owned by the
///   query. The `_borrowed` variants keep a reference instead, the borrow
///   checker makes sure the data outlives the query.
/// * A binding stays in place until it is replaced, across executions.
///
/// Methods return `&mut Self` for fluent chaining:
/// ```rust,ignore
/// query.bind_int(0, 42, true)?.bind_string(1, "hello")?.execute()?;
/// ```
///
/// # Results
/// `execute` buffers the first result set on the client, available through
/// `result_set`. Statements producing several result sets (procedure calls)
/// are walked with `fetch_more_results`.
pub trait PreparedQuery<'a>: Clone {
    type ResultSet: ResultSet;

    fn param_count(&self) -> usize;

    /// Bind a 32 bits integer, `signed` tells how the server reads the bits.
    fn bind_int(&mut self, param: usize, value: i32, signed: bool) -> Result<&mut Self>;
    fn bind_float(&mut self, param: usize, value: f32) -> Result<&mut Self>;
    /// Bind a copy of `value`.
    fn bind_string(&mut self, param: usize, value: &str) -> Result<&mut Self>;
    /// Bind `value` without copying it.
    fn bind_string_borrowed(&mut self, param: usize, value: &'a str) -> Result<&mut Self>;
    /// Bind a copy of `value`.
    fn bind_blob(&mut self, param: usize, value: &[u8]) -> Result<&mut Self>;
    /// Bind `value` without copying it.
    fn bind_blob_borrowed(&mut self, param: usize, value: &'a [u8]) -> Result<&mut Self>;
    fn bind_null(&mut self, param: usize) -> Result<&mut Self>;

    /// Bind any value convertible to [`Value`], dispatching on its variant.
    ///
    /// Integers must fit 32 bits, 64 bits floats are narrowed, timestamps are
    /// sent as text. Payloads are always copied.
    fn bind_value(&mut self, param: usize, value: impl AsValue) -> Result<&mut Self>
    where
        Self: Sized,
    {
        let value = value.as_value();
        match value {
            ref v if v.is_null() => self.bind_null(param),
            Value::Boolean(Some(v)) => self.bind_int(param, v as i32, true),
            Value::Int32(Some(v)) => self.bind_int(param, v, true),
            Value::UInt32(Some(v)) => self.bind_int(param, v as i32, false),
            Value::Int64(Some(v)) => {
                let v = i32::try_from(v).map_err(|_| {
                    crate::log_error!(Error::msg(format!(
                        "Cannot bind the value {v} to parameter {param}, it does not fit into i32"
                    )))
                })?;
                self.bind_int(param, v, true)
            }
            Value::UInt64(Some(v)) => {
                let v = u32::try_from(v).map_err(|_| {
                    crate::log_error!(Error::msg(format!(
                        "Cannot bind the value {v} to parameter {param}, it does not fit into u32"
                    )))
                })?;
                self.bind_int(param, v as i32, false)
            }
            Value::Float32(Some(v)) => self.bind_float(param, v),
            Value::Float64(Some(v)) => self.bind_float(param, v as f32),
            Value::Varchar(Some(ref v)) => self.bind_string(param, v),
            Value::Blob(Some(ref v)) => self.bind_blob(param, v),
            Value::Timestamp(Some(ref v)) => {
                let v = format_timestamp(v)?;
                self.bind_string(param, &v)
            }
            _ => Err(crate::log_error!(Error::msg(format!(
                "Cannot use a {:?} as a query parameter",
                value
            )))),
        }
    }

    /// Run the statement with the current bindings.
    ///
    /// Results still pending from the previous execution are discarded first.
    fn execute(&mut self) -> Result<()>;

    /// Advance to the next result set, `false` when there is none left.
    fn fetch_more_results(&mut self) -> bool;

    /// The result set currently buffered, if any.
    fn result_set(&mut self) -> Option<&mut Self::ResultSet>;

    /// Last error reported by the native layer.
    fn error(&self) -> DriverError;

    fn affected_rows(&self) -> u64;

    fn insert_id(&self) -> u64;
}
