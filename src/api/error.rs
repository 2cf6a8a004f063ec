// ABOUTME: Error type for box API calls, built with SNAFU.
// ABOUTME: Separates validation, transport, decoding and timeout failures.

use snafu::Snafu;
use std::time::Duration;

use crate::doer::DoerError;
use crate::types::UsernameError;

/// Failure of a box API operation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BoxError {
    #[snafu(display("invalid username: {source}"))]
    Validation { source: UsernameError },

    #[snafu(display("invalid argument: {reason}"))]
    InvalidArgument { reason: String },

    #[snafu(display("{function} failed: {source}"))]
    Dispatch { function: String, source: DoerError },

    #[snafu(display("cannot decode {function} reply: {source}"))]
    Decode {
        function: String,
        source: serde_json::Error,
    },

    #[snafu(display("{function} timed out after {after:?}"))]
    Timeout { function: String, after: Duration },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxErrorKind {
    /// A username failed validation; nothing was sent.
    Validation,
    /// Some other argument was rejected before sending.
    InvalidArgument,
    /// The transport could not deliver the call.
    Transport,
    /// The server executed the call and reported an error.
    Server,
    /// The reply did not have the expected shape.
    Decode,
    /// No reply arrived within the configured timeout.
    Timeout,
}

impl BoxError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> BoxErrorKind {
        match self {
            BoxError::Validation { .. } => BoxErrorKind::Validation,
            BoxError::InvalidArgument { .. } => BoxErrorKind::InvalidArgument,
            BoxError::Dispatch { source, .. } => match source {
                DoerError::Server { .. } => BoxErrorKind::Server,
                DoerError::ConnectionFailed(_) | DoerError::Closed => BoxErrorKind::Transport,
            },
            BoxError::Decode { .. } => BoxErrorKind::Decode,
            BoxError::Timeout { .. } => BoxErrorKind::Timeout,
        }
    }

    /// Returns the server error code if the server rejected the call.
    pub fn server_code(&self) -> Option<u32> {
        match self {
            BoxError::Dispatch {
                source: DoerError::Server { code, .. },
                ..
            } => Some(*code),
            _ => None,
        }
    }
}

impl From<UsernameError> for BoxError {
    fn from(source: UsernameError) -> Self {
        BoxError::Validation { source }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;
