//! Open FHIR resource payload.
//!
//! This layer reads `resourceType` and `id` and treats everything else as
//! an opaque map that round-trips untouched, so unknown fields survive a
//! proxy hop without a schema for every resource type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "resourceType")]
    pub resource_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// All other fields are stored here
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Resource {
    /// Create a new resource
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: None,
            rest: Map::new(),
        }
    }

    /// Parse a resource from a JSON value. Fails when `resourceType` is
    /// missing.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.rest.get(field)
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.rest.insert(field.into(), value);
    }

    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.set(field, value);
        self
    }

    /// Point this resource's `subject` at a Patient.
    pub fn set_subject_reference(&mut self, patient_id: &str) {
        self.set(
            "subject",
            json!({ "reference": format!("Patient/{}", patient_id) }),
        );
    }

    /// Patient payload for a first-time user: an official name plus a home
    /// email contact point.
    pub fn patient(display_name: &str, email: &str) -> Self {
        Resource::new("Patient")
            .with(
                "name",
                json!([{
                    "use": "official",
                    "family": display_name,
                    "given": [display_name]
                }]),
            )
            .with(
                "telecom",
                json!([{
                    "system": "email",
                    "value": email,
                    "use": "home"
                }]),
            )
    }

    /// MedicationStatement for a medication the subject is taking. The
    /// `subject` reference is filled in later, once the caller's Patient id
    /// is resolved.
    pub fn medication_statement(medication_id: &str) -> Self {
        Resource::new("MedicationStatement")
            .with("status", json!("active"))
            .with(
                "medicationReference",
                json!({ "reference": format!("Medication/{}", medication_id) }),
            )
            .with(
                "dosage",
                json!([{
                    "text": "5 g once daily",
                    "timing": { "repeat": { "frequency": 1, "period": 1, "periodUnit": "d" } },
                    "doseAndRate": [{
                        "doseQuantity": {
                            "value": 5,
                            "unit": "g",
                            "system": "http://unitsofmeasure.org",
                            "code": "g"
                        }
                    }]
                }]),
            )
    }
}
