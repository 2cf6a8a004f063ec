// ABOUTME: Language-neutral call request handed to a Doer.
// ABOUTME: Typed requests convert themselves into a function name plus arguments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored-procedure call: function name and positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub function: String,
    pub args: Vec<Value>,
}

impl CallRequest {
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn args(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.args.extend(values);
        self
    }
}

/// Implemented by every typed request in the crate.
pub trait Request {
    fn to_call(&self) -> CallRequest;
}

impl Request for CallRequest {
    fn to_call(&self) -> CallRequest {
        self.clone()
    }
}
