use business::domain::errors::RepositoryError;

/// Translates a driver error into the domain's store failure.
/// The raw error is logged here and goes no further.
pub fn to_repository_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    if matches!(err, sqlx::Error::RowNotFound) {
        return RepositoryError::NotFound;
    }

    let code = err
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());
    tracing::error!(
        operation,
        sqlstate = code.as_deref().unwrap_or("none"),
        "Store access failed: {}",
        err
    );

    from_sqlstate(code.as_deref())
}

pub fn from_sqlstate(code: Option<&str>) -> RepositoryError {
    match code {
        Some("55P03") => RepositoryError::LockTimeout,
        Some("23505") => RepositoryError::Duplicated,
        Some("23503") | Some("23514") => RepositoryError::Persistence,
        // Data exceptions (numeric overflow, invalid text) fail the same way on every attempt.
        Some(code) if code.starts_with("22") => RepositoryError::Persistence,
        _ => RepositoryError::DatabaseError,
    }
}
