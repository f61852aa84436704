use serde::{Deserialize, Serialize};

/// Open set of role tags attached to an identity record.
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roles(Vec<String>);

impl Roles {
    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }

    /// Add a role if not already present.
    pub fn add(&mut self, role: impl Into<String>) {
        let role = role.into();
        if !self.contains(&role) {
            self.0.push(role);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for Roles {
    /// Every record starts with the "user" role.
    fn default() -> Self {
        Self(vec!["user".to_string()])
    }
}

impl FromIterator<String> for Roles {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
