use crate::{Result, RowLabeled};

/// Rows of one result set, buffered on the client.
///
/// Rows are read forward with [`ResultSet::fetch_row`], [`ResultSet::rewind`]
/// starts over from the first row.
pub trait ResultSet {
    /// Number of buffered rows.
    fn row_count(&self) -> u64;
    fn field_count(&self) -> usize;
    fn field_name(&self, field: usize) -> Option<&str>;
    fn field_index(&self, name: &str) -> Option<usize>;
    /// Whether a call to `fetch_row` would return a row.
    fn more_rows(&self) -> bool;
    /// Advance to the next row, `None` past the last one.
    fn fetch_row(&mut self) -> Result<Option<&RowLabeled>>;
    /// The row returned by the last `fetch_row`.
    fn current_row(&self) -> Option<&RowLabeled>;
    fn rewind(&mut self) -> Result<()>;

    /// Read all the remaining rows.
    fn fetch_all(&mut self) -> Result<Vec<RowLabeled>> {
        let mut rows = Vec::with_capacity(self.row_count() as usize);
        while let Some(row) = self.fetch_row()? {
            rows.push(row.clone());
        }
        Ok(rows)
    }
}
