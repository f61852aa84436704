use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source}")]
    Sqlx {
        #[source]
        source: sqlx::Error,
    },

    /// A uniqueness constraint rejected the write. Kept separate from
    /// `Sqlx` so callers can map it to "already registered".
    #[error("Duplicate key: {message}")]
    DuplicateKey { message: String },

    #[error("Migration error: {message}")]
    Migration { message: String },

    #[error("Database initialization failed: {message}")]
    Initialization { message: String },
}

impl From<sqlx::Error> for DbError {
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &source {
            if db.is_unique_violation() {
                return Self::DuplicateKey {
                    message: db.message().to_string(),
                };
            }
        }

        Self::Sqlx { source }
    }
}

pub type Result<T> = StdResult<T, DbError>;
