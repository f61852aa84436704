//! Identity repository for keyed reads and writes on identity records.
//!
//! No orchestration logic lives here. Uniqueness of `auth_subject`,
//! `email` and `fhir_patient_id` is enforced by the schema; violations
//! surface as `DbError::DuplicateKey` so the caller can tell "already
//! registered" apart from a store outage.

use crate::{DbError, Result as DbErrorResult};

use cl_core::{IdentityRecord, ProfileAttributes, Roles};

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_auth_subject(
        &self,
        subject: &str,
    ) -> DbErrorResult<Option<IdentityRecord>> {
        let row = sqlx::query(
            r#"
                SELECT id, auth_subject, email, display_name, fhir_patient_id,
                    roles, profile, created_at, updated_at
                FROM app_user
                WHERE auth_subject = ?
            "#,
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_record(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Vec<IdentityRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, auth_subject, email, display_name, fhir_patient_id,
                    roles, profile, created_at, updated_at
                FROM app_user
                WHERE email = ?
                ORDER BY rowid
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_record).collect()
    }

    pub async fn list_all(&self) -> DbErrorResult<Vec<IdentityRecord>> {
        let rows = sqlx::query(
            r#"
                SELECT id, auth_subject, email, display_name, fhir_patient_id,
                    roles, profile, created_at, updated_at
                FROM app_user
                ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_record).collect()
    }

    pub async fn insert(&self, record: &IdentityRecord) -> DbErrorResult<()> {
        let id = record.id.to_string();
        let roles = encode_json(&record.roles, "roles")?;
        let profile = encode_json(&record.profile, "profile")?;
        let created_at = record.created_at.timestamp();
        let updated_at = record.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO app_user (
                    id, auth_subject, email, display_name, fhir_patient_id,
                    roles, profile, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&record.auth_subject)
        .bind(&record.email)
        .bind(&record.display_name)
        .bind(&record.fhir_patient_id)
        .bind(roles)
        .bind(profile)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist the mutable fields of an existing record. `auth_subject` and
    /// `fhir_patient_id` are not part of the statement on purpose: the link
    /// is written once, at insert.
    pub async fn update(&self, record: &IdentityRecord) -> DbErrorResult<()> {
        let id = record.id.to_string();
        let roles = encode_json(&record.roles, "roles")?;
        let profile = encode_json(&record.profile, "profile")?;
        let updated_at = record.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE app_user
                SET email = ?, display_name = ?, roles = ?, profile = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&record.email)
        .bind(&record.display_name)
        .bind(roles)
        .bind(profile)
        .bind(updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
            });
        }

        Ok(())
    }
}

fn encode_json<T: serde::Serialize>(value: &T, column: &str) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|e| DbError::Initialization {
        message: format!("Failed to encode app_user.{}: {}", column, e),
    })
}

fn decode_record(row: &SqliteRow) -> DbErrorResult<IdentityRecord> {
    let id: String = row.try_get("id")?;
    let roles: String = row.try_get("roles")?;
    let profile: String = row.try_get("profile")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(IdentityRecord {
        id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid UUID in app_user.id: {}", e),
        })?,
        auth_subject: row.try_get("auth_subject")?,
        email: row.try_get("email")?,
        display_name: row.try_get("display_name")?,
        fhir_patient_id: row.try_get("fhir_patient_id")?,
        roles: decode_json::<Roles>(&roles, "roles")?,
        profile: decode_json::<ProfileAttributes>(&profile, "profile")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in app_user.created_at".to_string(),
            }
        })?,
        updated_at: DateTime::from_timestamp(updated_at, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in app_user.updated_at".to_string(),
            }
        })?,
    })
}

fn decode_json<T: serde::de::DeserializeOwned>(text: &str, column: &str) -> DbErrorResult<T> {
    serde_json::from_str(text).map_err(|e| DbError::Initialization {
        message: format!("Invalid JSON in app_user.{}: {}", column, e),
    })
}
