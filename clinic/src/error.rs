//! Error types for the clinic core
//!
//! - `DomainError`: lookup and storage failures raised by services and repositories
//! - `ConfigError`: environment configuration problems
//!
//! User-input problems are not errors here. Form checks report them as
//! `validator::ValidationErrors` (see `app::validation`).

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Map a sea-orm error into the domain taxonomy
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = DomainError::NotFound("Owner not found with id: 7".to_string());
        assert_eq!(err.to_string(), "Entity not found: Owner not found with id: 7");
    }

    #[test]
    fn db_err_becomes_database_error() {
        let err: DomainError = sea_orm::DbErr::Custom("connection refused".to_string()).into();
        assert!(matches!(err, DomainError::Database(ref msg) if msg.contains("connection refused")));
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::Missing("DATABASE_URL").to_string(),
            "DATABASE_URL must be set"
        );
        let invalid = ConfigError::Invalid {
            key: "OWNERS_PAGE_SIZE",
            value: "zero".to_string(),
        };
        assert_eq!(invalid.to_string(), "Invalid value for OWNERS_PAGE_SIZE: zero");
    }
}
