use crate::Param;
use bindery_core::{Database, DriverError, Fields, Row};

/// Client error: unknown error.
pub const CR_UNKNOWN_ERROR: u32 = 2000;
/// Client error: commands out of sync.
pub const CR_COMMANDS_OUT_OF_SYNC: u32 = 2014;
/// Client error: no data supplied for parameters in prepared statement.
pub const CR_PARAMS_NOT_BOUND: u32 = 2031;
/// Client error: no prepared statement (it was closed).
pub const CR_NO_PREPARE_STMT: u32 = 2030;

/// Call surface of a compiled statement in the client library.
///
/// The protocol is strictly ordered: `bind_param`, `execute`, then for each
/// result set `result_metadata`, `store_result` and `fetch`, moving to the
/// following set with `next_result`. Every failure is also recorded and
/// returned by `error` until the next call that succeeds.
pub trait NativeStatement {
    /// Handle of the connection the statement belongs to.
    type Database: Database;

    fn param_count(&self) -> usize;
    /// Hand over the parameter values, one per placeholder.
    fn bind_param(&mut self, params: &[Param<'_>]) -> Result<(), DriverError>;
    fn execute(&mut self) -> Result<(), DriverError>;
    /// Number of columns of the current result, 0 for a status-only result.
    fn field_count(&self) -> usize;
    fn result_metadata(&self) -> Option<Fields>;
    /// Buffer all the rows of the current result on the client.
    fn store_result(&mut self) -> Result<(), DriverError>;
    /// Number of rows buffered by `store_result`.
    fn num_rows(&self) -> u64;
    /// Next buffered row, `None` past the last one.
    fn fetch(&mut self) -> Result<Option<Row>, DriverError>;
    /// Move the row cursor to `offset`.
    fn data_seek(&mut self, offset: u64);
    /// Move to the next result of a multi result execution.
    fn next_result(&mut self) -> Result<(), DriverError>;
    fn affected_rows(&self) -> u64;
    fn insert_id(&self) -> u64;
    fn error(&self) -> DriverError;
    /// Release the statement on the server. Called once, when the last owner
    /// of the statement is dropped.
    fn close(&mut self);
}
