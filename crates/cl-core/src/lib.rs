pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity_record::IdentityRecord;
pub use models::mirrored_resource::MirroredResource;
pub use models::profile_attributes::ProfileAttributes;
pub use models::roles::Roles;
pub use models::sync_claims::SyncClaims;
pub use models::sync_outcome::SyncOutcome;

#[cfg(test)]
mod tests;
