// ABOUTME: box.info request and its typed reply.
// ABOUTME: Decodes the instance fields useful for administration; others are ignored.

use serde::{Deserialize, Serialize};

use crate::doer::{CallRequest, Request};

/// Request for `box.info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoRequest;

impl Request for InfoRequest {
    fn to_call(&self) -> CallRequest {
        CallRequest::new("box.info")
    }
}

/// Instance information reported by `box.info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Server version string.
    pub version: String,
    /// Replica id; absent until the instance joins a replica set.
    #[serde(default)]
    pub id: Option<u32>,
    /// Whether the instance is read-only.
    pub ro: bool,
    /// Why the instance is read-only, when it is.
    #[serde(default)]
    pub ro_reason: Option<String>,
    /// Instance UUID.
    pub uuid: String,
    /// Process id.
    pub pid: u32,
    /// Instance status, e.g. `running` or `orphan`.
    pub status: String,
    /// Log sequence number.
    pub lsn: u64,
    /// Seconds since start.
    #[serde(default)]
    pub uptime: u64,
    #[serde(default)]
    pub cluster: Option<ClusterInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub uuid: String,
}

impl Info {
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }

    /// Replica set UUID, if the server reported one.
    pub fn replicaset_uuid(&self) -> Option<&str> {
        self.cluster.as_ref().map(|c| c.uuid.as_str())
    }
}
