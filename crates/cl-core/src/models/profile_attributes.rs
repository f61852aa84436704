use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider-supplied profile attributes. Open key-value map: this layer
/// reads the known keys below and round-trips everything else untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileAttributes(BTreeMap<String, Value>);

impl ProfileAttributes {
    pub const NAME: &'static str = "name";
    pub const PICTURE: &'static str = "picture";
    pub const EMAIL_VERIFIED: &'static str = "email_verified";

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn name(&self) -> Option<&str> {
        self.get(Self::NAME).and_then(Value::as_str)
    }

    pub fn picture(&self) -> Option<&str> {
        self.get(Self::PICTURE).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
