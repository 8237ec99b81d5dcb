//! Data source boundary.
//!
//! Host frameworks drive a data source through three calls: `metadata`
//! names it, `schema` declares its attributes and `read` produces state.
//! The types here model those calls without tying the crate to a
//! particular plugin transport.

mod diagnostics;
mod time_now;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use time_now::{TimeNowDataSource, time_now_schema};

use timenow_domain::{Schema, State};

use crate::error::{ApplicationError, ApplicationResult};

/// Input to [`DataSource::metadata`].
#[derive(Debug, Clone)]
pub struct MetadataRequest {
    /// Provider namespace supplied by the host, used verbatim.
    pub provider_type_name: String,
}

/// Output of [`DataSource::metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    /// Fully qualified data source type name.
    pub type_name: String,
}

/// Input to [`DataSource::read`].
#[derive(Debug, Clone, Default)]
pub struct ReadRequest {
    /// Practitioner-supplied configuration.
    ///
    /// Data sources without arguments report every entry as a warning.
    pub config: State,
}

/// Output of [`DataSource::read`].
#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    /// State to persist, if the read succeeded.
    pub state: Option<State>,
    /// Diagnostics reported during the read.
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    /// Sets the response state after checking it against `schema`.
    ///
    /// Any mismatch is reported as an error diagnostic and leaves the state
    /// unset.
    pub fn set_state(&mut self, schema: &Schema, state: State) {
        let errors = schema.check_state(&state);
        if errors.is_empty() {
            self.state = Some(state);
        } else {
            self.diagnostics
                .append(errors.into_iter().map(Diagnostic::from));
        }
    }

    /// Converts the response into the state, or the first error diagnostic.
    ///
    /// # Errors
    ///
    /// Returns an error if any error diagnostic was reported or no state
    /// was set.
    pub fn into_result(self) -> ApplicationResult<State> {
        if let Some(diag) = self.diagnostics.first_error() {
            return Err(ApplicationError::Diagnostic {
                summary: diag.summary.clone(),
                detail: diag.detail.clone(),
            });
        }
        self.state.ok_or(ApplicationError::MissingState)
    }
}

/// A data source as seen by the host framework.
pub trait DataSource: Send + Sync {
    /// Returns the type name the data source registers under.
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse;

    /// Returns the attribute schema.
    fn schema(&self) -> Schema;

    /// Produces the current state.
    fn read(&self, request: &ReadRequest) -> ReadResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use timenow_domain::{Attribute, AttributeType, AttributeValue};

    fn schema() -> Schema {
        Schema::new("test").with_attribute(
            "unix",
            Attribute::computed(AttributeType::Int64, "seconds"),
        )
    }

    #[test]
    fn test_set_state_accepts_valid_state() {
        let mut state = State::new();
        state.insert("unix", AttributeValue::Int64(1));

        let mut response = ReadResponse::default();
        response.set_state(&schema(), state.clone());

        assert!(response.diagnostics.is_empty());
        assert_eq!(response.into_result().ok(), Some(state));
    }

    #[test]
    fn test_set_state_reports_mismatch() {
        let mut state = State::new();
        state.insert("unix", AttributeValue::String("1".into()));

        let mut response = ReadResponse::default();
        response.set_state(&schema(), state);

        assert!(response.state.is_none());
        assert!(response.diagnostics.has_error());
        assert!(matches!(
            response.into_result(),
            Err(ApplicationError::Diagnostic { .. })
        ));
    }

    #[test]
    fn test_missing_state() {
        assert!(matches!(
            ReadResponse::default().into_result(),
            Err(ApplicationError::MissingState)
        ));
    }
}
