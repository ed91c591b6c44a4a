//! Error taxonomy shared by every store and service in the crate.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by the cinema stores and workflows.
///
/// Workflow operations never terminate the process: every failure is handed
/// back to the caller as one of these variants.
#[derive(Debug, Error)]
pub enum CinemaError {
    /// A lookup by identity or by a unique attribute matched nothing.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The input violates an entity invariant (blank title, non-positive
    /// capacity, malformed email, duplicate registration, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login with an unknown email or a wrong password.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Failure reported by the database backend.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl CinemaError {
    /// Builds a [`CinemaError::NotFound`] naming the entity kind and the key
    /// that matched nothing.
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        CinemaError::NotFound(format!("{} '{}' was not found", entity, key))
    }

    /// True for [`CinemaError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, CinemaError::NotFound(_))
    }

    /// Stable machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            CinemaError::NotFound(_) => "NOT_FOUND",
            CinemaError::Validation(_) => "VALIDATION_ERROR",
            CinemaError::Authentication(_) => "AUTH_ERROR",
            CinemaError::Database(_) => "DATABASE_ERROR",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = CinemaError> = std::result::Result<T, E>;
