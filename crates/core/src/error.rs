//! Domain error model.

use thiserror::Error;

use crate::entity::EntityKind;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// All variants are local, recoverable failures. Operations returning them leave
/// the collection they were called on untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The operation would store two weakly identical records of one kind.
    #[error("operation would result in duplicate {0}s")]
    DuplicateEntity(EntityKind),

    /// No stored record is strongly equal to the requested one.
    #[error("{0} not found")]
    EntityNotFound(EntityKind),

    /// A value failed validation (e.g. malformed field or index).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn duplicate(kind: EntityKind) -> Self {
        Self::DuplicateEntity(kind)
    }

    pub fn not_found(kind: EntityKind) -> Self {
        Self::EntityNotFound(kind)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
