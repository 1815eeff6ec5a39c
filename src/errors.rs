use thiserror::Error;

/// The one error kind this crate produces: a comparison evaluated to false
/// and the sink turned it into a failure signal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("assertion failed: {message}")]
pub struct AssertionFailed {
    pub message: String,
}

impl AssertionFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Type alias for results that use `AssertionFailed` as the error type.
pub type Result<T> = std::result::Result<T, AssertionFailed>;
