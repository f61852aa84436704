//! Read-only access to the mirrored resource table.

use crate::{DbError, Result as DbErrorResult};

use cl_core::MirroredResource;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ResourceMirrorRepository {
    pool: SqlitePool,
}

impl ResourceMirrorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All mirrored rows in insertion order. An empty table is an empty
    /// Vec, not an error.
    pub async fn list_all(&self) -> DbErrorResult<Vec<MirroredResource>> {
        let rows = sqlx::query(
            r#"
                SELECT res_id, fhir_id, res_type, res_version,
                    res_updated, res_published, res_deleted_at
                FROM resource_mirror
                ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_resource).collect()
    }
}

fn decode_resource(row: &SqliteRow) -> DbErrorResult<MirroredResource> {
    let res_updated: i64 = row.try_get("res_updated")?;
    let res_deleted_at: Option<i64> = row.try_get("res_deleted_at")?;

    Ok(MirroredResource {
        res_id: row.try_get("res_id")?,
        fhir_id: row.try_get("fhir_id")?,
        res_type: row.try_get("res_type")?,
        res_version: row.try_get("res_version")?,
        res_updated: DateTime::from_timestamp(res_updated, 0).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in resource_mirror.res_updated".to_string(),
            }
        })?,
        res_published: row.try_get("res_published")?,
        res_deleted_at: res_deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
    })
}
