use std::sync::Arc;

/// Metadata of a result column.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub table: String,
}

impl Field {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
        }
    }
}

/// Shared column metadata of a result set.
pub type Fields = Arc<[Field]>;
