//! Read-only projections of locally cached state for display. This
//! component never talks to the remote server.

use crate::Result as SyncErrorResult;

use cl_core::{IdentityRecord, MirroredResource};
use cl_db::{IdentityRepository, ResourceMirrorRepository};

pub struct ListingService {
    identities: IdentityRepository,
    mirror: ResourceMirrorRepository,
}

impl ListingService {
    pub fn new(identities: IdentityRepository, mirror: ResourceMirrorRepository) -> Self {
        Self { identities, mirror }
    }

    /// All mirrored resource rows in insertion order; empty when there are
    /// none.
    pub async fn list_resources(&self) -> SyncErrorResult<Vec<MirroredResource>> {
        Ok(self.mirror.list_all().await?)
    }

    pub async fn list_users(&self) -> SyncErrorResult<Vec<IdentityRecord>> {
        Ok(self.identities.list_all().await?)
    }

    pub async fn find_users_by_email(&self, email: &str) -> SyncErrorResult<Vec<IdentityRecord>> {
        Ok(self.identities.find_by_email(email).await?)
    }
}
