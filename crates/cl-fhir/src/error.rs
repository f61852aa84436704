use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur talking to the remote clinical-resource server.
#[derive(Error, Debug)]
pub enum FhirError {
    /// Non-2xx response. The body is carried verbatim for caller diagnosis.
    #[error("FHIR server returned {status}: {body}")]
    Remote { status: u16, body: String },

    /// The per-request deadline elapsed before the server answered.
    #[error("FHIR request timed out: {url}")]
    Timeout { url: String },

    #[error("HTTP transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid JSON in FHIR response: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// A 2xx create response without a server-assigned id.
    #[error("FHIR server response is missing the resource id")]
    MissingId,
}

impl FhirError {
    /// Classify a reqwest failure for `url`: deadline overruns become
    /// `Timeout`, everything else is `Transport`.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FhirError::Timeout {
                url: url.to_string(),
            }
        } else {
            FhirError::Transport { source }
        }
    }

    /// Status code of a remote failure, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            FhirError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = StdResult<T, FhirError>;
