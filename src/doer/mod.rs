// ABOUTME: Transport capability consumed by the box bindings.
// ABOUTME: Defines the Doer trait, call requests, responses and an in-memory double.

mod mock;
mod request;
mod response;

pub use mock::MockDoer;
pub use request::{CallRequest, Request};
pub use response::Response;

use async_trait::async_trait;
use std::sync::Arc;

/// Anything able to dispatch a call to the server and hand back its result.
///
/// A socket-backed connection implements this in production; tests use
/// [`MockDoer`]. The bindings never look past this method.
#[async_trait]
pub trait Doer: Send + Sync {
    /// Dispatch a call and wait for the server's reply.
    async fn execute(&self, request: &CallRequest) -> Result<Response, DoerError>;
}

#[async_trait]
impl<'a, T: Doer + ?Sized> Doer for &'a T {
    async fn execute(&self, request: &CallRequest) -> Result<Response, DoerError> {
        (**self).execute(request).await
    }
}

#[async_trait]
impl<T: Doer + ?Sized> Doer for Arc<T> {
    async fn execute(&self, request: &CallRequest) -> Result<Response, DoerError> {
        (**self).execute(request).await
    }
}

/// Errors reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoerError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("server error {code}: {message}")]
    Server { code: u32, message: String },

    #[error("connection closed")]
    Closed,
}
