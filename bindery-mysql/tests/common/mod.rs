#![allow(dead_code)]

use bindery_core::{Database, DriverError, Field, Fields, Row, Value};
use bindery_mysql::{
    CR_COMMANDS_OUT_OF_SYNC, CR_PARAMS_NOT_BOUND, MySQLStatement, NativeStatement, Param,
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

/// What the mock connection observed.
#[derive(Default)]
pub struct MockState {
    pub more_results: Cell<bool>,
    pub executed: Cell<usize>,
    pub next_results: Cell<usize>,
    pub closed: Cell<usize>,
    pub bound: RefCell<Vec<Vec<Value>>>,
}

#[derive(Clone, Default)]
pub struct MockDatabase {
    pub state: Rc<MockState>,
}

impl Database for MockDatabase {
    type Prepared<'a> = MySQLStatement<'a, MockStatement>;

    const NAME: &'static str = "mock";

    fn more_results(&self) -> bool {
        self.state.more_results.get()
    }

    fn prepare<'a>(&self, query: &str) -> bindery_core::Result<MySQLStatement<'a, MockStatement>> {
        let params = query.matches('?').count();
        Ok(MySQLStatement::new(
            self.clone(),
            MockStatement::new(self, params, []),
        ))
    }
}

#[derive(Default, Debug, Clone)]
pub struct MockSet {
    pub fields: Fields,
    pub rows: Vec<Row>,
    pub affected_rows: u64,
    pub insert_id: u64,
    /// Error returned when this set is stored.
    pub store_error: Option<DriverError>,
    /// Metadata reported for this set instead of `fields`.
    pub metadata: Option<Fields>,
}

impl MockSet {
    /// Result set with the given column names and rows.
    pub fn rows(names: &[&str], rows: Vec<Vec<Value>>) -> Self {
        Self {
            fields: names.iter().map(|v| Field::new(*v, "mock")).collect(),
            affected_rows: rows.len() as u64,
            rows: rows.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Status-only result.
    pub fn status(affected_rows: u64, insert_id: u64) -> Self {
        Self {
            affected_rows,
            insert_id,
            ..Default::default()
        }
    }

    pub fn with_store_error(mut self, error: DriverError) -> Self {
        self.store_error = Some(error);
        self
    }

    pub fn with_metadata(mut self, names: &[&str]) -> Self {
        self.metadata = Some(names.iter().map(|v| Field::new(*v, "mock")).collect());
        self
    }
}

/// Native statement replaying the same result sets at every execution.
pub struct MockStatement {
    pub state: Rc<MockState>,
    pub param_count: usize,
    pub script: Vec<MockSet>,
    /// Error returned by the next executions.
    pub execute_error: Option<DriverError>,
    /// Error returned by every store step.
    pub store_error: Option<DriverError>,
    /// Metadata reported instead of the one of the current set.
    pub metadata: Option<Fields>,
    params: Vec<Value>,
    pending: VecDeque<MockSet>,
    current: Option<MockSet>,
    stored: bool,
    cursor: usize,
    error: DriverError,
}

impl MockStatement {
    pub fn new(
        database: &MockDatabase,
        param_count: usize,
        script: impl IntoIterator<Item = MockSet>,
    ) -> Self {
        Self {
            state: database.state.clone(),
            param_count,
            script: script.into_iter().collect(),
            execute_error: None,
            store_error: None,
            metadata: None,
            params: Vec::new(),
            pending: VecDeque::new(),
            current: None,
            stored: false,
            cursor: 0,
            error: DriverError::default(),
        }
    }

    fn fail<T>(&mut self, error: DriverError) -> Result<T, DriverError> {
        self.error = error.clone();
        Err(error)
    }

    fn advance(&mut self) {
        self.current = self.pending.pop_front();
        self.stored = false;
        self.cursor = 0;
        self.state.more_results.set(!self.pending.is_empty());
    }
}

/// Build a statement over a new mock connection.
pub fn statement<'a>(
    param_count: usize,
    script: impl IntoIterator<Item = MockSet>,
) -> (MockDatabase, MySQLStatement<'a, MockStatement>) {
    let database = MockDatabase::default();
    let native = MockStatement::new(&database, param_count, script);
    (database.clone(), MySQLStatement::new(database, native))
}

pub fn recorded(param: &Param<'_>) -> Value {
    match *param {
        Param::Null => Value::Null,
        Param::Int {
            value,
            unsigned: false,
        } => Value::Int32(Some(value)),
        Param::Int {
            value,
            unsigned: true,
        } => Value::UInt32(Some(value as u32)),
        Param::Float(v) => Value::Float32(Some(v)),
        Param::String(v) => Value::Varchar(Some(String::from_utf8_lossy(v).into_owned())),
        Param::Blob(v) => Value::Blob(Some(v.into())),
    }
}

impl NativeStatement for MockStatement {
    type Database = MockDatabase;

    fn param_count(&self) -> usize {
        self.param_count
    }

    fn bind_param(&mut self, params: &[Param<'_>]) -> Result<(), DriverError> {
        if params.len() != self.param_count {
            return self.fail(DriverError::new(CR_PARAMS_NOT_BOUND, "Wrong parameter count"));
        }
        self.params = params.iter().map(recorded).collect();
        Ok(())
    }

    fn execute(&mut self) -> Result<(), DriverError> {
        self.current = None;
        self.pending.clear();
        self.state.more_results.set(false);
        if let Some(error) = self.execute_error.clone() {
            return self.fail(error);
        }
        self.state.executed.set(self.state.executed.get() + 1);
        self.state.bound.borrow_mut().push(self.params.clone());
        self.pending = self.script.iter().cloned().collect();
        self.advance();
        self.error = DriverError::default();
        Ok(())
    }

    fn field_count(&self) -> usize {
        self.current.as_ref().map(|v| v.fields.len()).unwrap_or_default()
    }

    fn result_metadata(&self) -> Option<Fields> {
        if let Some(metadata) = &self.metadata {
            return Some(metadata.clone());
        }
        let current = self.current.as_ref()?;
        if let Some(metadata) = &current.metadata {
            return Some(metadata.clone());
        }
        Some(current.fields.clone()).filter(|v| !v.is_empty())
    }

    fn store_result(&mut self) -> Result<(), DriverError> {
        let error = self
            .store_error
            .clone()
            .or_else(|| self.current.as_ref()?.store_error.clone());
        if let Some(error) = error {
            return self.fail(error);
        }
        self.stored = true;
        self.cursor = 0;
        Ok(())
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
                    "Commands out of sync",
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
                "No more results",
            ));
        }
        self.state.next_results.set(self.state.next_results.get() + 1);
        self.advance();
        Ok(())
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
        self.state.closed.set(self.state.closed.get() + 1);
    }
}
