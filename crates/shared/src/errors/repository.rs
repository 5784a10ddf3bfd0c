use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepositoryError {
    /// Pool exhaustion and connection loss, as opposed to a bad statement.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            RepositoryError::Sqlx(SqlxError::PoolTimedOut | SqlxError::PoolClosed | SqlxError::Io(_))
        )
    }
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        if let Some(db_err) = err.as_database_error() {
            let message = db_err.message().to_string();

            if db_err.is_unique_violation() {
                return RepositoryError::AlreadyExists(message);
            }
            if db_err.is_foreign_key_violation() {
                return RepositoryError::ForeignKey(message);
            }
            if db_err.is_check_violation() {
                return RepositoryError::Constraint(message);
            }
        }

        if matches!(err, SqlxError::RowNotFound) {
            return RepositoryError::NotFound;
        }

        RepositoryError::Sqlx(err)
    }
}
