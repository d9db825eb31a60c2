pub use bindery_core::*;
#[cfg(feature = "mysql")]
pub use bindery_mysql::*;
