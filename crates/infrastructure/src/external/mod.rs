//! "External program" data source protocol.
//!
//! The host writes a JSON object of string values to the program's stdin
//! and expects a flat JSON object of string values on stdout. Typed state
//! is flattened to strings on the way out.

use std::collections::BTreeMap;

use thiserror::Error;
use timenow_domain::State;
use tracing::debug;

use crate::serialization::{SerializationError, from_json, to_json_line};

/// Query arguments sent by the host.
pub type Query = BTreeMap<String, String>;

/// Errors raised while speaking the external protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The query on stdin is not a JSON object of strings.
    #[error("invalid query: {0}")]
    InvalidQuery(#[source] SerializationError),

    /// The result could not be encoded.
    #[error("failed to encode result: {0}")]
    Encode(#[from] SerializationError),
}

/// Parses the query sent on stdin.
///
/// Blank input is accepted as an empty query.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidQuery`] if the input is not a JSON object
/// whose values are all strings.
pub fn parse_query(input: &str) -> Result<Query, ProtocolError> {
    if input.trim().is_empty() {
        return Ok(Query::new());
    }
    let query: Query = from_json(input).map_err(ProtocolError::InvalidQuery)?;
    debug!(keys = query.len(), "parsed external query");
    Ok(query)
}

/// Encodes state as a single-line JSON object of strings.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_result(state: &State) -> Result<String, ProtocolError> {
    Ok(to_json_line(&state.to_string_map())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use timenow_domain::{AttributeValue, TimeSnapshot};

    #[test]
    fn test_blank_query_is_empty() {
        assert!(parse_query("").expect("blank is valid").is_empty());
        assert!(parse_query(" \n").expect("blank is valid").is_empty());
    }

    #[test]
    fn test_query_of_strings() {
        let query = parse_query(r#"{"trigger": "abc"}"#).expect("valid query");
        assert_eq!(query.get("trigger").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            parse_query("[1, 2]"),
            Err(ProtocolError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_rejects_non_string_values() {
        assert!(parse_query(r#"{"count": 3}"#).is_err());
    }

    #[test]
    fn test_encode_flattens_to_strings() {
        let snapshot = TimeSnapshot {
            day: 1,
            hour: 0,
            minute: 0,
            month: 1,
            rfc3339: "1970-01-01T00:00:00Z".to_string(),
            second: 0,
            unix: 0,
            year: 1970,
        };

        let json = encode_result(&snapshot.into_state()).expect("encode should work");
        assert_eq!(
            json,
            "{\"day\":\"1\",\"hour\":\"0\",\"minute\":\"0\",\"month\":\"1\",\
             \"rfc3339\":\"1970-01-01T00:00:00Z\",\"second\":\"0\",\"unix\":\"0\",\
             \"year\":\"1970\"}\n"
        );
    }

    #[test]
    fn test_encode_negative_unix() {
        let mut state = State::new();
        state.insert("unix", AttributeValue::Int64(-86_400));

        let json = encode_result(&state).expect("encode should work");
        assert_eq!(json, "{\"unix\":\"-86400\"}\n");
    }
}
