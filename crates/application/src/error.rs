//! Application error types

use thiserror::Error;
use timenow_domain::DomainError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The data source reported error diagnostics.
    #[error("{summary}: {detail}")]
    Diagnostic {
        /// Short summary of the first error diagnostic.
        summary: String,
        /// Detail of the first error diagnostic.
        detail: String,
    },

    /// The data source returned neither state nor an error.
    #[error("data source returned no state")]
    MissingState,
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
