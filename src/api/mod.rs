// ABOUTME: Entry point to the box administrative API.
// ABOUTME: Wraps a Doer and hands out session, info and schema facades.

mod error;
mod info;
pub mod schema;
mod session;

pub use error::{BoxError, BoxErrorKind, Result};
pub use info::{ClusterInfo, Info, InfoRequest};
pub use schema::Schema;
pub use session::{Session, SessionSuRequest, SessionUserRequest};

use snafu::ResultExt;
use std::time::Duration;

use crate::config::Config;
use crate::doer::{CallRequest, Doer, Request, Response};
use error::{DecodeSnafu, DispatchSnafu, TimeoutSnafu};

/// Typed access to `box` on one connection.
///
/// Holds the transport and an optional per-call timeout. Facades returned by
/// [`BoxApi::session`] and [`BoxApi::schema`] borrow it and own nothing.
#[derive(Debug, Clone)]
pub struct BoxApi<D> {
    doer: D,
    timeout: Option<Duration>,
}

impl<D: Doer> BoxApi<D> {
    pub fn new(doer: D) -> Self {
        Self {
            doer,
            timeout: None,
        }
    }

    /// Build from a loaded config, picking up its call timeout.
    pub fn from_config(doer: D, config: &Config) -> Self {
        Self {
            doer,
            timeout: config.timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn doer(&self) -> &D {
        &self.doer
    }

    pub fn into_doer(self) -> D {
        self.doer
    }

    /// Session administration facade (`box.session`).
    pub fn session(&self) -> Session<'_, D> {
        Session::new(self)
    }

    /// Schema administration facade (`box.schema`).
    pub fn schema(&self) -> Schema<'_, D> {
        Schema::new(self)
    }

    /// Fetch `box.info` from the server.
    pub async fn info(&self) -> Result<Info> {
        self.call(&InfoRequest).await
    }

    /// Send a request and decode the first returned value.
    pub(crate) async fn call<T, R>(&self, request: &R) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        R: Request + Sync,
    {
        let call = request.to_call();
        let response = self.send(&call).await?;
        response.decode_first().context(DecodeSnafu {
            function: call.function.as_str(),
        })
    }

    /// Send a request whose reply carries nothing of interest.
    pub(crate) async fn call_unit<R: Request + Sync>(&self, request: &R) -> Result<()> {
        self.send(&request.to_call()).await.map(|_| ())
    }

    /// Send any request and return the raw reply.
    pub async fn dispatch<R: Request + Sync>(&self, request: &R) -> Result<Response> {
        self.send(&request.to_call()).await
    }

    async fn send(&self, call: &CallRequest) -> Result<Response> {
        tracing::debug!(function = %call.function, args = call.args.len(), "dispatching call");

        let pending = self.doer.execute(call);
        let outcome = match self.timeout {
            Some(after) => match tokio::time::timeout(after, pending).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(function = %call.function, ?after, "call timed out");
                    return TimeoutSnafu {
                        function: call.function.as_str(),
                        after,
                    }
                    .fail();
                }
            },
            None => pending.await,
        };

        outcome.context(DispatchSnafu {
            function: call.function.as_str(),
        })
    }
}
