use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The store refused a write because of a foreign-key or unique constraint.
    #[error("integrity violation: {0}")]
    Integrity(String),
    #[error("database error: {0}")]
    Db(String),
}

/// SQLite enforces `ON DELETE RESTRICT` through its trigger machinery and
/// reports SQLITE_CONSTRAINT_TRIGGER (1811) instead of the foreign-key code.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

fn sqlite_restrict_violation(err: &DbErr) -> Option<String> {
    let (DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e))) = err else {
        return None;
    };
    let db_err = e.as_database_error()?;
    (db_err.code().as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER)).then(|| db_err.message().to_string())
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) | Some(SqlErr::UniqueConstraintViolation(msg)) => {
                Self::Integrity(msg)
            }
            _ => match sqlite_restrict_violation(&err) {
                Some(msg) => Self::Integrity(msg),
                None => Self::Db(err.to_string()),
            },
        }
    }
}

impl ModelError {
    pub fn is_integrity(&self) -> bool { matches!(self, Self::Integrity(_)) }
}
