//! Identity synchronizer - keeps the local store and the remote Patient
//! registry in step.
//!
//! ## Ordering
//!
//! On the creation path the remote Patient is materialized BEFORE the local
//! insert. A local record is therefore never persisted with a dangling
//! link. The tradeoff: if the insert then fails, the Patient already exists
//! remotely with nothing pointing at it. That orphan is surfaced (warning
//! log plus the id on the error), never silently retried or cleaned up
//! here.
//!
//! ## Concurrency
//!
//! Two concurrent calls for the same never-seen subject may both observe
//! "not found" and both create a Patient. The store's unique constraint on
//! `auth_subject` arbitrates: one insert wins, the loser gets
//! `DuplicateIdentity` and its Patient becomes an orphan. There is no
//! single-flight mechanism serializing callers; idempotency rests on the
//! store lookup, not on process-local state, so it holds across restarts
//! and multiple instances.

use crate::{Result as SyncErrorResult, SyncError};

use cl_core::{IdentityRecord, SyncClaims, SyncOutcome};
use cl_db::{DbError, IdentityRepository};
use cl_fhir::{FhirClient, Resource};

use log::{debug, info, warn};

pub struct IdentitySynchronizer {
    identities: IdentityRepository,
    fhir: FhirClient,
}

impl IdentitySynchronizer {
    pub fn new(identities: IdentityRepository, fhir: FhirClient) -> Self {
        Self { identities, fhir }
    }

    /// Ensure a local record and a linked remote Patient exist for the
    /// subject in `claims`.
    ///
    /// Existing record: `email`, `display_name` and `updated_at` are
    /// refreshed, nothing else; zero remote calls. Unseen subject: a
    /// Patient is created remotely, then a record linked to it is inserted.
    pub async fn synchronize(&self, claims: &SyncClaims) -> SyncErrorResult<SyncOutcome> {
        claims.validate()?;

        if let Some(mut record) = self.identities.find_by_auth_subject(&claims.subject).await? {
            // Re-sync: refresh the mutable profile fields. The remote
            // Patient is not touched on this path.
            record.apply_claims(claims);
            self.identities.update(&record).await?;

            debug!("identity refreshed for subject {}", claims.subject);

            return Ok(SyncOutcome {
                record,
                is_new: false,
            });
        }

        // First sight of this subject: materialize the remote Patient
        // before writing anything locally.
        let patient = Resource::patient(&claims.display_name(), &claims.email);
        let created = self.fhir.create(&patient).await?;

        info!(
            "created FHIR Patient {} for subject {}",
            created.id, claims.subject
        );

        let record = IdentityRecord::from_claims(claims, created.id.clone());
        match self.identities.insert(&record).await {
            Ok(()) => Ok(SyncOutcome {
                record,
                is_new: true,
            }),
            Err(DbError::DuplicateKey { message }) => {
                warn!(
                    "identity insert conflict for subject {}; FHIR Patient {} is orphaned",
                    claims.subject, created.id
                );
                Err(SyncError::DuplicateIdentity {
                    message,
                    orphaned_patient_id: Some(created.id),
                })
            }
            Err(other) => {
                warn!(
                    "identity insert failed for subject {}; FHIR Patient {} is orphaned",
                    claims.subject, created.id
                );
                Err(SyncError::Storage { source: other })
            }
        }
    }
}
