use crate::{NativeStatement, SharedHandle};
use bindery_core::{Error, Fields, Result, ResultSet, RowLabeled, RowNames, log_error};
use std::fmt::{self, Display};

/// Result set buffered on the client by a [`crate::MySQLStatement`].
///
/// It reads rows straight from the statement it shares with the adapter, so
/// the adapter re-initializes it every time the statement moves to a new
/// result set.
pub struct BoundResults<N: NativeStatement> {
    statement: SharedHandle<N>,
    fields: Fields,
    labels: RowNames,
    field_count: usize,
    row_count: u64,
    cursor: u64,
    current: Option<RowLabeled>,
}

impl<N: NativeStatement> BoundResults<N> {
    pub(crate) fn new(statement: SharedHandle<N>) -> Self {
        Self {
            statement,
            fields: Fields::from([]),
            labels: RowNames::from([]),
            field_count: 0,
            row_count: 0,
            cursor: 0,
            current: None,
        }
    }

    /// Bind to the metadata of the current result of the statement.
    pub(crate) fn initialize(&mut self, fields: Fields, field_count: usize) -> Result<()> {
        self.clear();
        if fields.len() != field_count {
            return Err(log_error!(Error::msg(format!(
                "The result metadata describes {} fields but the statement reports {}",
                fields.len(),
                field_count
            ))));
        }
        self.labels = fields.iter().map(|v| v.name.clone()).collect();
        self.fields = fields;
        self.field_count = field_count;
        Ok(())
    }

    /// Read the row count once the statement buffered the rows.
    pub(crate) fn update(&mut self) {
        self.row_count = self.statement.borrow().num_rows();
        self.cursor = 0;
        self.current = None;
    }

    pub(crate) fn clear(&mut self) {
        self.fields = Fields::from([]);
        self.labels = RowNames::from([]);
        self.field_count = 0;
        self.row_count = 0;
        self.cursor = 0;
        self.current = None;
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl<N: NativeStatement> ResultSet for BoundResults<N> {
    fn row_count(&self) -> u64 {
        self.row_count
    }

    fn field_count(&self) -> usize {
        self.field_count
    }

    fn field_name(&self, field: usize) -> Option<&str> {
        self.labels.get(field).map(String::as_str)
    }

    fn field_index(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|v| v == name)
    }

    fn more_rows(&self) -> bool {
        self.cursor < self.row_count
    }

    fn fetch_row(&mut self) -> Result<Option<&RowLabeled>> {
        if !self.more_rows() {
            return Ok(None);
        }
        let fetched = self.statement.borrow_mut().fetch();
        let values = match fetched {
            Ok(Some(values)) => values,
            Ok(None) => {
                self.cursor = self.row_count;
                self.current = None;
                return Ok(None);
            }
            Err(e) => {
                return Err(log_error!(
                    Error::new(e).context(format!("While fetching the row {}", self.cursor))
                ));
            }
        };
        if values.len() != self.field_count {
            return Err(log_error!(Error::msg(format!(
                "The row {} has {} values but the result set has {} fields",
                self.cursor,
                values.len(),
                self.field_count
            ))));
        }
        self.cursor += 1;
        self.current = Some(RowLabeled::new(self.labels.clone(), values));
        Ok(self.current.as_ref())
    }

    fn current_row(&self) -> Option<&RowLabeled> {
        self.current.as_ref()
    }

    fn rewind(&mut self) -> Result<()> {
        self.statement.borrow_mut().data_seek(0);
        self.cursor = 0;
        self.current = None;
        Ok(())
    }
}

impl<N: NativeStatement> Display for BoundResults<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundResults({} fields, {} rows)",
            self.field_count, self.row_count
        )
    }
}
