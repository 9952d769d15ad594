/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.lock_timeout")]
    LockTimeout,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
    pub fn lock_timeout() -> Self {
        RepositoryError::LockTimeout
    }

    /// Infrastructure failures that may succeed when the caller tries again.
    /// Constraint violations and missing rows will not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RepositoryError::DatabaseError | RepositoryError::LockTimeout
        )
    }
}
