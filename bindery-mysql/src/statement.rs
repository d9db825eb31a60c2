use crate::{BoundResults, MySQLNative, NativeStatement, ParamBind, SharedHandle, shared_handle};
use bindery_core::{Database, DriverError, Error, Fields, PreparedQuery, Result, log_error};
use std::{
    fmt::{self, Display},
    rc::Rc,
};

/// Prepared statement adapter.
///
/// Owns the parameter binding table and the buffered result set, the
/// compiled statement is shared with every clone and closed when the last of
/// them is dropped.
///
/// `'a` bounds the data bound with the `_borrowed` methods.
pub struct MySQLStatement<'a, N: NativeStatement = MySQLNative> {
    pub(crate) database: N::Database,
    pub(crate) statement: SharedHandle<N>,
    pub(crate) params: Vec<ParamBind<'a>>,
    pub(crate) fields: Option<Fields>,
    pub(crate) results: Option<BoundResults<N>>,
    pub(crate) has_results: bool,
}

impl<'a, N: NativeStatement> MySQLStatement<'a, N> {
    /// Take ownership of a compiled statement of `database`.
    pub fn new(database: N::Database, statement: N) -> Self {
        let count = statement.param_count();
        Self {
            database,
            statement: shared_handle(statement, N::close),
            params: ParamBind::table(count),
            fields: None,
            results: None,
            has_results: false,
        }
    }

    pub fn database(&self) -> &N::Database {
        &self.database
    }

    fn slot(&mut self, param: usize) -> Result<&mut ParamBind<'a>> {
        let len = self.params.len();
        self.params.get_mut(param).ok_or_else(|| {
            log_error!(Error::msg(format!(
                "Index {param} cannot be bound, the query has only {len} parameters"
            )))
        })
    }

    fn clear_results(&mut self) {
        if let Some(results) = &mut self.results {
            results.clear();
        }
        self.fields = None;
        self.has_results = false;
    }

    fn drain_results(&mut self) {
        let mut drained = 0;
        while self.fetch_more_results() {
            drained += 1;
        }
        if drained > 0 {
            log::trace!("Discarded {drained} pending result sets");
        }
    }

    /// Hand the current result of the statement to the result set and buffer
    /// its rows.
    fn store_results(&mut self, fields: Fields, field_count: usize) -> Result<()> {
        self.fields = Some(fields.clone());
        let statement = &self.statement;
        let results = self
            .results
            .get_or_insert_with(|| BoundResults::new(statement.clone()));
        if let Err(e) = results.initialize(fields, field_count) {
            self.has_results = false;
            return Err(e.context("While initializing the result set"));
        }
        let stored = self.statement.borrow_mut().store_result();
        results.update();
        self.has_results = stored.is_ok();
        stored.map_err(|e| {
            log_error!(Error::new(e).context(format!(
                "While buffering the result set ({} fields)",
                field_count
            )))
        })
    }

    fn native_error(&self, error: DriverError, context: &str) -> Error {
        log_error!(Error::new(error).context(format!(
            "{} ({} statement {})",
            context,
            self.database.identifier(),
            self
        )))
    }
}

impl<'a, N: NativeStatement> PreparedQuery<'a> for MySQLStatement<'a, N> {
    type ResultSet = BoundResults<N>;

    fn param_count(&self) -> usize {
        self.params.len()
    }

    fn bind_int(&mut self, param: usize, value: i32, signed: bool) -> Result<&mut Self> {
        self.slot(param)?.set_int(value, signed);
        Ok(self)
    }

    fn bind_float(&mut self, param: usize, value: f32) -> Result<&mut Self> {
        self.slot(param)?.set_float(value);
        Ok(self)
    }

    fn bind_string(&mut self, param: usize, value: &str) -> Result<&mut Self> {
        self.slot(param)?.set_string(value.as_bytes());
        Ok(self)
    }

    fn bind_string_borrowed(&mut self, param: usize, value: &'a str) -> Result<&mut Self> {
        self.slot(param)?.set_string_borrowed(value.as_bytes());
        Ok(self)
    }

    fn bind_blob(&mut self, param: usize, value: &[u8]) -> Result<&mut Self> {
        self.slot(param)?.set_blob(value);
        Ok(self)
    }

    fn bind_blob_borrowed(&mut self, param: usize, value: &'a [u8]) -> Result<&mut Self> {
        self.slot(param)?.set_blob_borrowed(value);
        Ok(self)
    }

    fn bind_null(&mut self, param: usize) -> Result<&mut Self> {
        self.slot(param)?.set_null();
        Ok(self)
    }

    fn execute(&mut self) -> Result<()> {
        // The connection accepts a new command only once every result of the
        // previous one was read.
        self.drain_results();
        self.clear_results();
        log::debug!("Executing {}", self);
        if !self.params.is_empty() {
            let params = self
                .params
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    v.param().ok_or_else(|| {
                        log_error!(Error::msg(format!(
                            "No data supplied for parameter {i}, bind a value (or NULL) before executing"
                        )))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            let bound = self.statement.borrow_mut().bind_param(&params);
            if let Err(e) = bound {
                return Err(self.native_error(e, "While binding the parameters"));
            }
        }
        let executed = self.statement.borrow_mut().execute();
        if let Err(e) = executed {
            return Err(self.native_error(e, "While executing"));
        }
        let (field_count, fields) = {
            let statement = self.statement.borrow();
            (statement.field_count(), statement.result_metadata())
        };
        if field_count == 0 {
            return Ok(());
        }
        let Some(fields) = fields else {
            return Ok(());
        };
        self.store_results(fields, field_count)
    }

    fn fetch_more_results(&mut self) -> bool {
        if self.fields.is_none() || !self.database.more_results() {
            return false;
        }
        self.clear_results();
        let advanced = self.statement.borrow_mut().next_result();
        if let Err(e) = advanced {
            log::error!(
                "{:#}",
                Error::new(e).context(format!("While moving {} to the next result set", self))
            );
            return false;
        }
        let (field_count, fields) = {
            let statement = self.statement.borrow();
            (statement.field_count(), statement.result_metadata())
        };
        // Procedure calls end with a status-only result.
        if field_count == 0 {
            return false;
        }
        let Some(fields) = fields else {
            return false;
        };
        log::debug!("Moving {} to a result set of {} fields", self, field_count);
        self.store_results(fields, field_count).is_ok()
    }

    fn result_set(&mut self) -> Option<&mut Self::ResultSet> {
        if self.has_results {
            self.results.as_mut()
        } else {
            None
        }
    }

    fn error(&self) -> DriverError {
        self.statement.borrow().error()
    }

    fn affected_rows(&self) -> u64 {
        self.statement.borrow().affected_rows()
    }

    fn insert_id(&self) -> u64 {
        self.statement.borrow().insert_id()
    }
}

impl<'a, N: NativeStatement> Clone for MySQLStatement<'a, N> {
    /// Shares the compiled statement, copies the bindings (owned payloads
    /// included). The clone starts without results.
    fn clone(&self) -> Self {
        Self {
            database: self.database.clone(),
            statement: self.statement.clone(),
            params: self.params.clone(),
            fields: None,
            results: None,
            has_results: false,
        }
    }
}

impl<'a, N: NativeStatement> Drop for MySQLStatement<'a, N> {
    fn drop(&mut self) {
        self.drain_results();
        self.clear_results();
    }
}

impl<'a, N: NativeStatement> Display for MySQLStatement<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", Rc::as_ptr(&self.statement))
    }
}
