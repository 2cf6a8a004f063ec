// ABOUTME: In-memory Doer for tests and dry runs.
// ABOUTME: Replays queued responses in order and records every dispatched call.

use super::{CallRequest, Doer, DoerError, Response};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// Test double standing in for a live connection.
///
/// Each call to [`Doer::execute`] pops the next queued reply. Running out of
/// replies is reported as a connection failure so that unexpected calls are
/// visible in tests.
#[derive(Debug, Default)]
pub struct MockDoer {
    replies: Mutex<VecDeque<Result<Response, DoerError>>>,
    calls: Mutex<Vec<CallRequest>>,
    delay: Option<Duration>,
}

impl MockDoer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers with the given responses, in order.
    pub fn with_responses(responses: impl IntoIterator<Item = Response>) -> Self {
        let mock = Self::new();
        for response in responses {
            mock.push_response(response);
        }
        mock
    }

    /// Hold every reply back for `delay` before returning it.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_response(&self, response: Response) {
        self.replies.lock().push_back(Ok(response));
    }

    pub fn push_error(&self, error: DoerError) {
        self.replies.lock().push_back(Err(error));
    }

    /// Calls dispatched so far, oldest first.
    pub fn calls(&self) -> Vec<CallRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().len()
    }
}

#[async_trait]
impl Doer for MockDoer {
    async fn execute(&self, request: &CallRequest) -> Result<Response, DoerError> {
        self.calls.lock().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.replies.lock().pop_front().unwrap_or_else(|| {
            Err(DoerError::ConnectionFailed(format!(
                "no queued response for {}",
                request.function
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn replays_responses_in_order() {
        let mock = MockDoer::with_responses([
            Response::new(vec![json!(1)]),
            Response::new(vec![json!(2)]),
        ]);
        let call = CallRequest::new("f");

        assert_eq!(mock.execute(&call).await.unwrap().data, vec![json!(1)]);
        assert_eq!(mock.execute(&call).await.unwrap().data, vec![json!(2)]);
        assert_eq!(mock.call_count(), 2);
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    async fn exhausted_queue_is_an_error() {
        let mock = MockDoer::new();
        let err = mock.execute(&CallRequest::new("box.info")).await.unwrap_err();
        assert!(err.to_string().contains("box.info"));
    }

    #[tokio::test]
    async fn queued_errors_are_returned() {
        let mock = MockDoer::new();
        mock.push_error(DoerError::Closed);
        let err = mock.execute(&CallRequest::new("f")).await.unwrap_err();
        assert_eq!(err, DoerError::Closed);
    }
}
