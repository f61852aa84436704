pub mod client;
pub mod error;
pub mod resource;

pub use client::{CreatedResource, FhirClient};
pub use error::{FhirError, Result};
pub use resource::Resource;
