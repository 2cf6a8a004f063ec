// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and canned server replies for integration tests.

use serde_json::{Value, json};
use std::sync::Once;
use tntbox::Response;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("tntbox=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Reply with a single returned value.
#[allow(dead_code)]
pub fn reply(value: Value) -> Response {
    Response::new(vec![value])
}

/// A `box.info` reply from a healthy, writable instance.
#[allow(dead_code)]
pub fn info_reply() -> Response {
    reply(json!({
        "version": "3.2.0-0-gabcdef0",
        "id": 1,
        "ro": false,
        "uuid": "8f2b5c6e-3d4a-4b1c-9e8f-7a6b5c4d3e2f",
        "pid": 31337,
        "status": "running",
        "lsn": 42,
        "uptime": 3600,
        "cluster": {"uuid": "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d"},
        "replication": {}
    }))
}
