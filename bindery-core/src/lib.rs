mod as_value;
mod database;
mod driver_error;
mod field;
mod prepared;
mod result_set;
mod row;
mod util;
mod value;

pub use ::anyhow::Context;
pub use as_value::*;
pub use database::*;
pub use driver_error::*;
pub use field::*;
pub use prepared::*;
pub use result_set::*;
pub use row::*;
pub use util::*;
pub use value::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
