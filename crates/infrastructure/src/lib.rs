//! Timenow Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the wire encodings used by the
//! host shim.

pub mod adapters;
pub mod external;
pub mod serialization;

pub use adapters::{FixedClock, SystemClock};
pub use external::{ProtocolError, Query, encode_result, parse_query};
pub use serialization::{SerializationError, from_json, to_json_line, to_json_stable};
