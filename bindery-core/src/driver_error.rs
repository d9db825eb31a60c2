use std::fmt::{self, Display};

/// Error reported by the native client layer: the numeric code and the
/// message as the server or client library produced them.
///
/// A code of `0` with an empty message means no error.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub code: u32,
    pub message: String,
}

impl DriverError {
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.code != 0
    }
}

impl Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for DriverError {}
