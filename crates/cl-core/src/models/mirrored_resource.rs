use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the local mirror of remote-server resources, denormalized
/// for display. Written by the remote server's own tooling; read-only for
/// this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirroredResource {
    pub res_id: String,
    /// Id of the resource on the remote server.
    pub fhir_id: String,
    pub res_type: String,
    pub res_version: i64,
    pub res_updated: DateTime<Utc>,
    pub res_published: bool,
    pub res_deleted_at: Option<DateTime<Utc>>,
}

impl MirroredResource {
    pub fn is_deleted(&self) -> bool {
        self.res_deleted_at.is_some()
    }
}
