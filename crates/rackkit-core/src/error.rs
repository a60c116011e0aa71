//! Error handling for RackKit.
//!
//! Most malformed input is recovered by defaulting or clamping rather than
//! reported; the types here cover the cases where a record genuinely cannot
//! be rendered. All error types use `thiserror`.

use thiserror::Error;

/// Reasons the normalizer rejects a raw device entry outright.
///
/// Rejection is per record; sibling records in the same cabinet are
/// unaffected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceRejection {
    /// The entry carries no brand/model name and placeholders are disabled.
    #[error("device entry has no brand/model name")]
    MissingName,

    /// The unit span was given explicitly but is not a positive finite number.
    #[error("unit span {span} is not a positive number")]
    InvalidUnitSpan {
        /// The offending span value.
        span: f64,
    },
}

/// Unified error type for RackKit.
#[derive(Error, Debug)]
pub enum Error {
    /// A device entry was rejected during normalization.
    #[error(transparent)]
    Device(#[from] DeviceRejection),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message.
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
