use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures raised by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("connection error: {0}")]
    Connection(#[from] diesel::r2d2::PoolError),
    /// The database rejected or failed the statement.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// Stored or submitted data violates a catalog invariant.
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
