mod blob;
mod bind;
mod bound_results;
mod client;
mod database;
mod handle;
mod native;
mod row_wrap;
mod statement;
mod value_wrap;

pub use blob::*;
pub use bind::*;
pub use bound_results::*;
pub use client::*;
pub use database::*;
pub(crate) use handle::*;
pub use native::*;
pub(crate) use row_wrap::*;
pub use statement::*;
pub(crate) use value_wrap::*;
