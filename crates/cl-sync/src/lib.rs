//! Synchronization and proxy layer between the local identity store and the
//! remote clinical-resource server.
//!
//! Three entry points:
//! - [`IdentitySynchronizer`] keeps exactly one remote Patient linked to
//!   each local identity record, created lazily on first sight of a
//!   subject.
//! - [`ResourceProxy`] forwards create/delete calls for arbitrary resource
//!   types and can pin a dependent resource to the caller's own Patient.
//! - [`ListingService`] serves read-only projections of locally cached
//!   state.
//!
//! There is no two-phase commit across the two systems. The remote call
//! always happens before the local write, so a local record is never
//! persisted with a dangling link; the cost is that a failed local write
//! can leave an orphaned remote Patient, which is surfaced through
//! [`SyncError::DuplicateIdentity`] rather than silently retried.

pub mod error;
pub mod listing;
pub mod proxy;
pub mod synchronizer;

pub use error::{Result, SyncError};
pub use listing::ListingService;
pub use proxy::ResourceProxy;
pub use synchronizer::IdentitySynchronizer;

#[cfg(test)]
mod tests;
