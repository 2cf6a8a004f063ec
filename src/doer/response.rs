// ABOUTME: Server reply to a call request.
// ABOUTME: Holds the returned values and decodes them into typed results.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values returned by a call, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub data: Vec<Value>,
}

impl Response {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }

    /// A reply carrying no return values.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decode the first returned value. A reply with no values decodes as `null`.
    pub fn decode_first<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let first = self.data.first().cloned().unwrap_or(Value::Null);
        serde_json::from_value(first)
    }
}
