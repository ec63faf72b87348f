use talentsoft_core::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn constraint_code(error: &sqlx::Error) -> Option<String> {
    match error {
        sqlx::Error::Database(database_error) => {
            database_error.code().map(|code| code.into_owned())
        }
        _ => None,
    }
}

/// Maps an insert failure. A dangling foreign key means a referenced row is missing.
pub(crate) fn insert_error(error: sqlx::Error, operation: &str, conflict: &str) -> AppError {
    match constraint_code(&error).as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::Conflict(conflict.to_owned()),
        Some(FOREIGN_KEY_VIOLATION) => {
            AppError::NotFound(format!("failed to {operation}: referenced row does not exist"))
        }
        _ => AppError::Internal(format!("failed to {operation}: {error}")),
    }
}

/// Maps an update or delete failure. A foreign key violation means the row is still in use.
pub(crate) fn write_error(error: sqlx::Error, operation: &str, conflict: &str) -> AppError {
    match constraint_code(&error).as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::Conflict(conflict.to_owned()),
        Some(FOREIGN_KEY_VIOLATION) => {
            AppError::Conflict(format!("failed to {operation}: row is still referenced"))
        }
        _ => AppError::Internal(format!("failed to {operation}: {error}")),
    }
}

/// Maps a failure that carries no constraint meaning.
pub(crate) fn query_error(error: sqlx::Error, operation: &str) -> AppError {
    AppError::Internal(format!("failed to {operation}: {error}"))
}
