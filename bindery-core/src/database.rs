use crate::{PreparedQuery, Result};

/// A live database handle.
///
/// Handles are cheap to clone, every clone refers to the same connection.
/// Prepared queries keep a clone of the handle that created them.
pub trait Database: Clone {
    /// Queries prepared by this database.
    type Prepared<'a>: PreparedQuery<'a>;

    /// Driver name, also the expected scheme of the connection URL.
    const NAME: &'static str;

    /// Identity used when reporting errors.
    fn identifier(&self) -> &str {
        Self::NAME
    }

    /// Whether the connection reports further result sets pending from the
    /// last executed statement.
    fn more_results(&self) -> bool;

    /// Compile `query` on the server.
    fn prepare<'a>(&self, query: &str) -> Result<Self::Prepared<'a>>;
}
