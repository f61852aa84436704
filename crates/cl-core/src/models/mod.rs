pub mod identity_record;
pub mod mirrored_resource;
pub mod profile_attributes;
pub mod roles;
pub mod sync_claims;
pub mod sync_outcome;
