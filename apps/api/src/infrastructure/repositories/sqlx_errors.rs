use crate::domain::repositories::RepositoryError;

/// Maps a sqlx error, turning unique violations into `Conflict`
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            let field = match db_err.constraint() {
                Some(constraint) if constraint.contains("email") => "email",
                _ => "value",
            };
            return RepositoryError::Conflict(field.to_string());
        }
    }

    RepositoryError::Database(format!("{}: {}", context, err))
}
