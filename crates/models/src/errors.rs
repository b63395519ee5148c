use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

/// Postgres SQLSTATE codes classified beyond what `DbErr::sql_err` covers.
pub mod sqlstate {
    pub const CHECK_VIOLATION: &str = "23514";
    pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
}

/// Storage-level failures, classified so callers can map them to domain errors.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record not found")]
    NotFound,
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("value out of range: {0}")]
    OutOfRange(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify by SQLSTATE; message text is locale dependent and never inspected.
    pub fn from_sqlstate(code: &str, msg: String) -> Self {
        match code {
            sqlstate::CHECK_VIOLATION => ModelError::ConstraintViolation(msg),
            sqlstate::NUMERIC_VALUE_OUT_OF_RANGE => ModelError::OutOfRange(msg),
            _ => ModelError::Db(msg),
        }
    }
}

/// SQLSTATE reported by the server for a failed statement.
fn sqlstate_of(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
            e.as_database_error().and_then(|d| d.code()).map(|c| c.into_owned())
        }
        _ => None,
    }
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return ModelError::DuplicateKey(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return ModelError::ConstraintViolation(msg),
            _ => {}
        }
        if let Some(code) = sqlstate_of(&err) {
            return ModelError::from_sqlstate(&code, err.to_string());
        }
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ModelError::NotFound,
            other => ModelError::Db(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err: ModelError = DbErr::RecordNotFound("users".into()).into();
        assert!(matches!(err, ModelError::NotFound));
    }

    #[test]
    fn sqlstate_drives_classification() {
        let check = ModelError::from_sqlstate("23514", "neue Zeile verletzt Check-Constraint".into());
        assert!(matches!(check, ModelError::ConstraintViolation(_)));
        let overflow = ModelError::from_sqlstate("22003", "integer out of range".into());
        assert!(matches!(overflow, ModelError::OutOfRange(_)));
        assert!(matches!(ModelError::from_sqlstate("40001", "serialization".into()), ModelError::Db(_)));
    }

    #[test]
    fn message_text_alone_is_not_classified() {
        let err: ModelError = DbErr::Custom("new row violates check constraint \"x\"".into()).into();
        assert!(matches!(err, ModelError::Db(_)));
    }

    #[test]
    fn other_errors_keep_message() {
        let err: ModelError = DbErr::Custom("boom".into()).into();
        match err {
            ModelError::Db(msg) => assert!(msg.contains("boom")),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
