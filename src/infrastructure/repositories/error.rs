use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                if db_err.message().contains("users.username") {
                    DomainError::Conflict("username already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                }
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                DomainError::Validation(format!("constraint violated: {}", db_err.message()))
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}
