// ABOUTME: Session administration facade over box.session.
// ABOUTME: Builds validated su requests and queries the effective user.

use super::{BoxApi, Result};
use crate::doer::{CallRequest, Doer, Request};
use crate::types::{Username, UsernameError};

/// Request to switch the session's effective user (`box.session.su`).
///
/// Only constructible from a valid [`Username`], so every instance is ready
/// to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSuRequest {
    username: Username,
}

impl SessionSuRequest {
    pub fn new(username: &str) -> std::result::Result<Self, UsernameError> {
        Username::new(username).map(Self::from)
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}

impl From<Username> for SessionSuRequest {
    fn from(username: Username) -> Self {
        Self { username }
    }
}

impl Request for SessionSuRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.session.su").arg(self.username.as_str())
    }
}

/// Request for the name of the session's effective user (`box.session.user`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionUserRequest;

impl Request for SessionUserRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.session.user")
    }
}

/// View over one connection's session. Holds nothing but a borrow.
#[derive(Debug)]
pub struct Session<'a, D> {
    api: &'a BoxApi<D>,
}

impl<'a, D: Doer> Session<'a, D> {
    pub fn new(api: &'a BoxApi<D>) -> Self {
        Self { api }
    }

    /// Switch the effective user of the session.
    ///
    /// The name is validated before anything is sent.
    pub async fn su(&self, username: &str) -> Result<()> {
        let request = SessionSuRequest::new(username)?;
        self.api.call_unit(&request).await
    }

    /// Name of the current effective user.
    pub async fn user(&self) -> Result<String> {
        self.api.call(&SessionUserRequest).await
    }
}

// Copy/Clone without requiring D: Clone.
impl<D> Clone for Session<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Session<'_, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn su_request_targets_box_session_su() {
        let request = SessionSuRequest::new("admin").unwrap();
        let call = request.to_call();
        assert_eq!(call.function, "box.session.su");
        assert_eq!(call.args, vec![json!("admin")]);
    }

    #[test]
    fn user_request_has_no_args() {
        let call = SessionUserRequest.to_call();
        assert_eq!(call.function, "box.session.user");
        assert!(call.args.is_empty());
    }
}
