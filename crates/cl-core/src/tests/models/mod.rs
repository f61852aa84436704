mod identity_record;
mod roles;
mod sync_claims;
