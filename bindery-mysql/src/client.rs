use crate::{
    CR_COMMANDS_OUT_OF_SYNC, CR_NO_PREPARE_STMT, CR_PARAMS_NOT_BOUND, MySQLDatabase,
    NativeStatement, Param, driver_error,
};
use bindery_core::{DriverError, Error, Fields, Row};
use mysql_async::{Params, Statement};
use std::collections::VecDeque;

/// One result of an execution, read in full from the server.
#[derive(Default, Debug)]
pub struct StoredSet {
    pub fields: Fields,
    pub rows: Vec<Row>,
    pub affected_rows: u64,
    pub insert_id: u64,
}

/// Statement compiled by a [`MySQLDatabase`].
///
/// `mysql_async` reads results as a stream that must be consumed before the
/// connection accepts another command, so `execute` reads every result set
/// of the call at once and the following steps walk the buffered sets.
pub struct MySQLNative {
    database: MySQLDatabase,
    statement: Option<Statement>,
    params: Vec<mysql_async::Value>,
    current: Option<StoredSet>,
    pending: VecDeque<StoredSet>,
    stored: bool,
    cursor: usize,
    error: DriverError,
}

impl MySQLNative {
    pub(crate) fn new(database: MySQLDatabase, statement: Statement) -> Self {
        Self {
            database,
            statement: Some(statement),
            params: Vec::new(),
            current: None,
            pending: VecDeque::new(),
            stored: false,
            cursor: 0,
            error: DriverError::default(),
        }
    }

    fn fail<T>(&mut self, error: DriverError) -> Result<T, DriverError> {
        self.error = error.clone();
        Err(error)
    }

    fn succeed(&mut self) -> Result<(), DriverError> {
        self.error = DriverError::default();
        Ok(())
    }

    fn reset(&mut self) {
        self.current = None;
        self.pending.clear();
        self.stored = false;
        self.cursor = 0;
        self.database.session.set_more_results(false);
    }

    fn advance(&mut self) {
        self.current = self.pending.pop_front();
        self.stored = false;
        self.cursor = 0;
        self.database
            .session
            .set_more_results(!self.pending.is_empty());
    }
}

impl NativeStatement for MySQLNative {
    type Database = MySQLDatabase;

    fn param_count(&self) -> usize {
        self.statement
            .as_ref()
            .map(|v| v.num_params() as usize)
            .unwrap_or_default()
    }

    fn bind_param(&mut self, params: &[Param<'_>]) -> Result<(), DriverError> {
        let count = self.param_count();
        if params.len() != count {
            return self.fail(DriverError::new(
                CR_PARAMS_NOT_BOUND,
                format!(
                    "No data supplied for parameters in prepared statement, {} values for {} parameters",
                    params.len(),
                    count
                ),
            ));
        }
        self.params = params.iter().copied().map(Into::into).collect();
        self.succeed()
    }

    fn execute(&mut self) -> Result<(), DriverError> {
        self.reset();
        let Some(statement) = &self.statement else {
            return self.fail(DriverError::new(
                CR_NO_PREPARE_STMT,
                "Statement not prepared",
            ));
        };
        let count = statement.num_params() as usize;
        if self.params.len() != count {
            return self.fail(DriverError::new(
                CR_PARAMS_NOT_BOUND,
                "No data supplied for parameters in prepared statement",
            ));
        }
        let params = if self.params.is_empty() {
            Params::Empty
        } else {
            Params::Positional(self.params.clone())
        };
        match self.database.session.execute(statement, params) {
            Ok(sets) => {
                self.pending = sets;
                self.advance();
                self.succeed()
            }
            Err(e) => {
                let error = driver_error(&e);
                log::debug!("{:#}", Error::new(e).context("While executing"));
                self.fail(error)
            }
        }
    }

    fn field_count(&self) -> usize {
        self.current.as_ref().map(|v| v.fields.len()).unwrap_or_default()
    }

    fn result_metadata(&self) -> Option<Fields> {
        self.current
            .as_ref()
            .filter(|v| !v.fields.is_empty())
            .map(|v| v.fields.clone())
    }

    fn store_result(&mut self) -> Result<(), DriverError> {
        if self.current.is_none() {
            return self.fail(DriverError::new(
                CR_COMMANDS_OUT_OF_SYNC,
                "Commands out of sync; you can't run this command now",
            ));
        }
        self.stored = true;
        self.cursor = 0;
        self.succeed()
    }

    fn num_rows(&self) -> u64 {
        match &self.current {
            Some(current) if self.stored => current.rows.len() as u64,
            _ => 0,
        }
    }

    fn fetch(&mut self) -> Result<Option<Row>, DriverError> {
        let row = match &self.current {
            Some(current) if self.stored => current.rows.get(self.cursor).cloned(),
            _ => {
                return self.fail(DriverError::new(
                    CR_COMMANDS_OUT_OF_SYNC,
                    "Commands out of sync; you can't run this command now",
                ));
            }
        };
        if row.is_some() {
            self.cursor += 1;
        }
        Ok(row)
    }

    fn data_seek(&mut self, offset: u64) {
        self.cursor = offset as usize;
    }

    fn next_result(&mut self) -> Result<(), DriverError> {
        if self.pending.is_empty() {
            return self.fail(DriverError::new(
                CR_COMMANDS_OUT_OF_SYNC,
                "Commands out of sync; there are no more results",
            ));
        }
        self.advance();
        self.succeed()
    }

    fn affected_rows(&self) -> u64 {
        self.current.as_ref().map(|v| v.affected_rows).unwrap_or_default()
    }

    fn insert_id(&self) -> u64 {
        self.current.as_ref().map(|v| v.insert_id).unwrap_or_default()
    }

    fn error(&self) -> DriverError {
        self.error.clone()
    }

    fn close(&mut self) {
        self.reset();
        if let Some(statement) = self.statement.take() {
            log::trace!("Closing the statement {}", statement.id());
            if let Err(e) = self.database.session.close(statement) {
                log::error!("{:#}", Error::new(e).context("While closing the statement"));
            }
        }
    }
}
