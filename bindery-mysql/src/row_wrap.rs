use crate::ValueWrap;
use bindery_core::{Field, Fields, Row};
use mysql_async::{Column, FromRowError};
use std::sync::Arc;

/// Row decoded from the binary protocol, with the columns it was read with.
pub(crate) struct RowWrap {
    pub(crate) values: Row,
    pub(crate) columns: Arc<[Column]>,
}

impl mysql_async::prelude::FromRow for RowWrap {
    fn from_row_opt(mut row: mysql_async::Row) -> Result<Self, FromRowError>
    where
        Self: Sized,
    {
        let columns = row.columns();
        let values = (0..row.len())
            .map(|i| match row.take_opt::<ValueWrap, _>(i) {
                Some(Ok(v)) => Ok(v.0),
                _ => Err(()),
            })
            .collect::<Result<Row, ()>>();
        match values {
            Ok(values) => Ok(RowWrap { values, columns }),
            Err(()) => Err(FromRowError(row)),
        }
    }
}

pub(crate) fn fields_from_columns(columns: &[Column]) -> Fields {
    columns
        .iter()
        .map(|v| Field::new(v.name_str().into_owned(), v.table_str().into_owned()))
        .collect()
}
