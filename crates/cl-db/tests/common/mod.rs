use chrono::Utc;
use cl_core::{IdentityRecord, SyncClaims};
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    cl_db::connect_in_memory()
        .await
        .expect("Failed to create test database")
}

#[allow(dead_code)]
pub fn sample_record(subject: &str, email: &str) -> IdentityRecord {
    let claims = SyncClaims {
        subject: subject.to_string(),
        email: email.to_string(),
        username: Some("alice".to_string()),
        name: None,
        picture: None,
    };
    IdentityRecord::from_claims(&claims, format!("pat-{}", subject))
}

/// Seed a mirrored resource row directly; the repository itself is
/// read-only.
#[allow(dead_code)]
pub async fn seed_mirror_row(pool: &SqlitePool, res_id: &str, res_type: &str) {
    sqlx::query(
        r#"
            INSERT INTO resource_mirror (res_id, fhir_id, res_type, res_version, res_updated)
            VALUES (?, ?, ?, 1, ?)
        "#,
    )
    .bind(res_id)
    .bind(format!("fhir-{}", res_id))
    .bind(res_type)
    .bind(Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to seed resource_mirror");
}
