//! HTTP client for the clinical-resource REST API.
//!
//! Pure transport: no business rules, no retries. Non-2xx responses are
//! surfaced verbatim (status plus raw body) for the caller to act on.

use crate::{FhirError, Resource, Result as FhirErrorResult};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

pub struct FhirClient {
    base_url: String,
    timeout: Duration,
    client: ReqwestClient,
}

/// Outcome of a successful create: the server-assigned id plus the full
/// representation the server returned.
#[derive(Debug, Clone)]
pub struct CreatedResource {
    pub id: String,
    pub body: Value,
}

impl FhirClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - FHIR endpoint URL (e.g., "http://localhost:8080/fhir")
    /// * `timeout` - Deadline applied to every request
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: ReqwestClient::new(),
        }
    }

    /// Build a request with FHIR content negotiation headers and the
    /// per-request deadline.
    fn request(&self, method: Method, path: &str) -> (String, reqwest::RequestBuilder) {
        let url = format!("{}{}", self.base_url, path);
        let req = self
            .client
            .request(method, &url)
            .header("Content-Type", "application/fhir+json")
            .header("Accept", "application/fhir+json")
            .timeout(self.timeout);

        (url, req)
    }

    /// POST `{base}/{resourceType}`. Returns the server-assigned id and the
    /// created representation.
    pub async fn create(&self, resource: &Resource) -> FhirErrorResult<CreatedResource> {
        let (url, req) = self.request(Method::POST, &format!("/{}", resource.resource_type));
        let payload =
            serde_json::to_string(resource).map_err(|source| FhirError::Json { source })?;

        let response = req
            .body(payload)
            .send()
            .await
            .map_err(|e| FhirError::from_reqwest(&url, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FhirError::from_reqwest(&url, e))?;

        if !status.is_success() {
            warn!(
                "FHIR create {} failed: status={}",
                resource.resource_type,
                status.as_u16()
            );
            return Err(FhirError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|source| FhirError::Json { source })?;
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or(FhirError::MissingId)?;

        debug!("created FHIR {} with id {}", resource.resource_type, id);

        Ok(CreatedResource { id, body: value })
    }

    /// DELETE `{base}/{resourceType}/{id}`. Returns whatever body the
    /// server answered with (`Null` when the body is empty).
    pub async fn delete(&self, resource_type: &str, id: &str) -> FhirErrorResult<Value> {
        let (url, req) = self.request(Method::DELETE, &format!("/{}/{}", resource_type, id));

        let response = req
            .send()
            .await
            .map_err(|e| FhirError::from_reqwest(&url, e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FhirError::from_reqwest(&url, e))?;

        if !status.is_success() {
            warn!(
                "FHIR delete {}/{} failed: status={}",
                resource_type,
                id,
                status.as_u16()
            );
            return Err(FhirError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|source| FhirError::Json { source })
    }
}
