// ABOUTME: Library root for tntbox - typed bindings for the Tarantool box API.
// ABOUTME: The CLI binary is in main.rs.

pub mod api;
pub mod config;
pub mod doer;
pub mod error;
pub mod output;
pub mod types;

pub use api::{BoxApi, BoxError, BoxErrorKind, Session, SessionSuRequest};
pub use doer::{CallRequest, Doer, DoerError, MockDoer, Request, Response};
