use thiserror::Error;

use crate::repository::RepositoryError;

/// Error type returned by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Input failed structural or referential validation.
    #[error("{0}")]
    Form(String),
    /// The submitted admin password does not match the stored one.
    #[error("incorrect password")]
    IncorrectPassword,
    /// Update or delete attempted before any admin password exists.
    #[error("no admin password configured")]
    PasswordNotConfigured,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Map a repository failure on a write path. Referential violations are
/// reported to the caller, everything else is logged and hidden.
pub(crate) fn write_error(action: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::Validation(message) => ServiceError::Form(message),
        other => {
            log::error!("Failed to {action}: {other}");
            ServiceError::Internal
        }
    }
}
