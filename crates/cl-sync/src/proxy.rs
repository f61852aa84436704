//! Resource proxy - pass-through create/delete for arbitrary resource
//! types, plus the composite path that pins a dependent resource to the
//! caller's own Patient. No local persistence happens here.

use crate::{Result as SyncErrorResult, SyncError};

use cl_db::IdentityRepository;
use cl_fhir::{CreatedResource, FhirClient, Resource};

use log::debug;
use serde_json::Value;

pub struct ResourceProxy {
    identities: IdentityRepository,
    fhir: FhirClient,
}

impl ResourceProxy {
    pub fn new(identities: IdentityRepository, fhir: FhirClient) -> Self {
        Self { identities, fhir }
    }

    /// Forward a create for `payload.resource_type`. The server's failure
    /// status and body pass through unchanged.
    pub async fn create_resource(&self, payload: &Resource) -> SyncErrorResult<CreatedResource> {
        if payload.resource_type.trim().is_empty() {
            return Err(SyncError::Validation {
                message: "Missing required field: resourceType".to_string(),
            });
        }

        let created = self.fhir.create(payload).await?;

        debug!(
            "proxied create of {} -> {}",
            payload.resource_type, created.id
        );

        Ok(created)
    }

    /// Like [`create_resource`](Self::create_resource), but for a raw JSON
    /// payload as received from a caller. A payload without a
    /// `resourceType` discriminator is rejected before any remote call.
    pub async fn create_resource_json(&self, payload: Value) -> SyncErrorResult<CreatedResource> {
        let resource = Resource::from_value(payload).map_err(|_| SyncError::Validation {
            message: "Missing required field: resourceType".to_string(),
        })?;

        self.create_resource(&resource).await
    }

    /// Forward a delete by type and id. Idempotency is whatever the remote
    /// server provides; a delete of an already-deleted id surfaces the
    /// server's own error.
    pub async fn delete_resource(&self, resource_type: &str, id: &str) -> SyncErrorResult<Value> {
        if resource_type.trim().is_empty() || id.trim().is_empty() {
            return Err(SyncError::Validation {
                message: "resourceType and id are required".to_string(),
            });
        }

        Ok(self.fhir.delete(resource_type, id).await?)
    }

    /// Create a resource that must reference the caller's own Patient.
    ///
    /// Resolves `auth_subject` to the linked Patient id and substitutes it
    /// into the payload's `subject` reference before delegating to
    /// [`create_resource`](Self::create_resource). Fails with
    /// `IdentityNotLinked` when the subject has never completed a
    /// synchronization.
    pub async fn create_for_subject(
        &self,
        auth_subject: &str,
        mut payload: Resource,
    ) -> SyncErrorResult<CreatedResource> {
        let record = self
            .identities
            .find_by_auth_subject(auth_subject)
            .await?
            .ok_or_else(|| SyncError::IdentityNotLinked {
                subject: auth_subject.to_string(),
            })?;

        let patient_id =
            record
                .fhir_patient_id
                .as_deref()
                .ok_or_else(|| SyncError::IdentityNotLinked {
                    subject: auth_subject.to_string(),
                })?;

        payload.set_subject_reference(patient_id);

        self.create_resource(&payload).await
    }
}
