mod multiple;
mod simple;

use bindery_core::Database;
use log::LevelFilter;
use multiple::multiple;
use simple::simple;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Run the live suite against `database`, a connection to an empty schema.
pub fn execute_tests<D: Database>(database: D) {
    simple(&database);
    multiple(&database);
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
