use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failures a catalog service can report back to the caller
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request referenced something that cannot be used, e.g. a missing parent
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// A unique key is already taken
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    /// Classifies a failed write.
    ///
    /// Constraint violations raised by the database become the same errors the
    /// pre-checks would have produced, so a lost race still answers 409/400.
    pub fn from_write(err: DbErr, conflict: &str) -> Self {
        if let DbErr::RecordNotUpdated = err {
            return Self::NotFound("Record no longer exists".to_string());
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                log::warn!("Unique constraint violated: {detail}");
                Self::Conflict(conflict.to_string())
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                log::warn!("Foreign key constraint violated: {detail}");
                Self::Validation("Referenced record does not exist".to_string())
            }
            _ => Self::Database(err),
        }
    }
}
