//! Identity record - the local side of the user/Patient link.

use crate::{ProfileAttributes, Roles, SyncClaims};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// A local user entry linking an auth-provider subject to an optional
/// remote FHIR Patient id.
///
/// `auth_subject` is unique across all records, and at most one record
/// points at a given Patient id. Records are created on first
/// synchronization and updated on every later one; they are never deleted
/// by this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub id: Uuid,
    pub auth_subject: String,
    pub email: String,
    pub display_name: String,
    /// Remote Patient id. Set once, when the Patient is first materialized;
    /// re-sync never touches it.
    pub fhir_patient_id: Option<String>,
    pub roles: Roles,
    pub profile: ProfileAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityRecord {
    /// Build a record for a first-seen subject, linked to the Patient the
    /// remote server just created.
    pub fn from_claims(claims: &SyncClaims, fhir_patient_id: String) -> Self {
        let now = Utc::now();

        let mut profile = ProfileAttributes::default();
        if let Some(name) = &claims.name {
            profile.set(ProfileAttributes::NAME, json!(name));
        }
        if let Some(picture) = &claims.picture {
            profile.set(ProfileAttributes::PICTURE, json!(picture));
        }
        profile.set(ProfileAttributes::EMAIL_VERIFIED, json!(true));

        Self {
            id: Uuid::new_v4(),
            auth_subject: claims.subject.clone(),
            email: claims.email.clone(),
            display_name: claims.display_name(),
            fhir_patient_id: Some(fhir_patient_id),
            roles: Roles::default(),
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a re-sync: refresh the mutable profile fields and bump
    /// `updated_at`. The subject and the Patient link are left alone.
    pub fn apply_claims(&mut self, claims: &SyncClaims) {
        self.email = claims.email.clone();
        self.display_name = claims.display_name();
        self.updated_at = Utc::now();
    }

    /// Whether a remote Patient has been materialized for this record.
    pub fn is_linked(&self) -> bool {
        self.fhir_patient_id.is_some()
    }
}
