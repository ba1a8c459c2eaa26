pub(crate) mod post_repository;
pub(crate) mod tag_repository;
pub(crate) mod user_repository;

use crate::domain::error::DomainError;

/// Postgres error codes for unique (23505) and foreign-key (23503)
/// constraint failures. Both roll the enclosing transaction back in full.
pub(super) fn map_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err
        && matches!(db_err.code().as_deref(), Some("23505") | Some("23503"))
    {
        let detail = db_err
            .constraint()
            .map(str::to_string)
            .unwrap_or_else(|| db_err.message().to_string());
        return DomainError::ConstraintViolation(detail);
    }
    DomainError::Unexpected(err.to_string())
}
