//! Domain error types

use thiserror::Error;

use crate::schema::AttributeType;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A state value was set for an attribute the schema does not declare.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A state value does not match the type declared by the schema.
    #[error("attribute {name} expects {expected}, got {actual}")]
    TypeMismatch {
        /// Attribute name.
        name: String,
        /// Type declared in the schema.
        expected: AttributeType,
        /// Type of the supplied value.
        actual: AttributeType,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
