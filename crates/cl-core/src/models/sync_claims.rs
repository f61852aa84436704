//! Profile claims handed over by the auth provider after login.

use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// What the auth provider knows about the caller: an opaque subject id plus
/// profile attributes. This layer never performs authentication itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncClaims {
    /// Opaque subject identifier (e.g. "auth0|abc123"). Join key between
    /// the local store and the remote Patient registry.
    pub subject: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl SyncClaims {
    /// Validate required fields before any store or remote call is made.
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.subject.is_empty() {
            return Err(CoreError::InvalidClaim {
                claim: "subject",
                message: "subject cannot be empty".to_string(),
            });
        }

        if self.email.is_empty() {
            return Err(CoreError::InvalidClaim {
                claim: "email",
                message: "email cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Display name preference: explicit username, then profile name, then
    /// the local part of the email address. Empty strings count as absent.
    pub fn display_name(&self) -> String {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.name.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| email_local_part(&self.email))
            .to_string()
    }
}

/// Local part of an email address ("alice@x.com" -> "alice").
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
