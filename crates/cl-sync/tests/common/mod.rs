use std::time::Duration;

use cl_core::SyncClaims;
use cl_db::IdentityRepository;
use cl_fhir::FhirClient;
use cl_sync::IdentitySynchronizer;
use sqlx::SqlitePool;
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{method, path};

pub async fn test_pool() -> SqlitePool {
    cl_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

#[allow(dead_code)]
pub fn fhir_client(server: &MockServer) -> FhirClient {
    FhirClient::new(&server.uri(), Duration::from_secs(5))
}

#[allow(dead_code)]
pub fn synchronizer(pool: &SqlitePool, server: &MockServer) -> IdentitySynchronizer {
    IdentitySynchronizer::new(IdentityRepository::new(pool.clone()), fhir_client(server))
}

#[allow(dead_code)]
pub fn claims(subject: &str, email: &str, username: Option<&str>) -> SyncClaims {
    SyncClaims {
        subject: subject.to_string(),
        email: email.to_string(),
        username: username.map(String::from),
        name: None,
        picture: None,
    }
}

/// Mount a Patient-create mock answering with the given id.
#[allow(dead_code)]
pub async fn mock_patient_create(server: &MockServer, id: &str, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/Patient"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "resourceType": "Patient",
            "id": id
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
