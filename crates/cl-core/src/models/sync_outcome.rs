use crate::IdentityRecord;

use serde::Serialize;

/// Result of a synchronize call: the up-to-date record plus whether this
/// call created it.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub record: IdentityRecord,
    pub is_new: bool,
}
