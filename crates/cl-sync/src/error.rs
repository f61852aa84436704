use std::result::Result as StdResult;

use cl_core::CoreError;
use cl_db::DbError;
use cl_fhir::FhirError;
use thiserror::Error;

/// Failure taxonomy for synchronization and proxy operations. Every
/// operation returns a success value or one of these; nothing is swallowed.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Caller-supplied claims failed required-field checks.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A proxied payload failed structural checks before any remote call.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Non-2xx from the remote server; body carried verbatim.
    #[error("Remote server returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// A remote call exceeded its deadline. No local write happened.
    #[error("Remote call timed out: {url}")]
    Timeout { url: String },

    /// The store rejected an insert on a uniqueness constraint. When the
    /// remote Patient had already been created, its id rides along so the
    /// orphan can be reconciled.
    #[error("Duplicate identity: {message}")]
    DuplicateIdentity {
        message: String,
        orphaned_patient_id: Option<String>,
    },

    /// Dependent-resource creation was attempted before synchronization
    /// completed for this subject.
    #[error("Identity not linked to a remote Patient: {subject}")]
    IdentityNotLinked { subject: String },

    #[error("Storage error: {source}")]
    Storage {
        #[source]
        source: DbError,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<CoreError> for SyncError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput {
            message: err.to_string(),
        }
    }
}

impl From<DbError> for SyncError {
    fn from(source: DbError) -> Self {
        match source {
            DbError::DuplicateKey { message } => Self::DuplicateIdentity {
                message,
                orphaned_patient_id: None,
            },
            other => Self::Storage { source: other },
        }
    }
}

impl From<FhirError> for SyncError {
    fn from(err: FhirError) -> Self {
        match err {
            FhirError::Remote { status, body } => Self::Remote { status, body },
            FhirError::Timeout { url } => Self::Timeout { url },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = StdResult<T, SyncError>;
