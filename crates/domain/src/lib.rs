//! Timenow Domain - Core types
//!
//! This crate defines the snapshot record, the schema model and the value
//! types exchanged with the host. All types here are pure Rust with no I/O.

pub mod error;
pub mod schema;
pub mod snapshot;
pub mod type_name;
pub mod value;

pub use error::{DomainError, DomainResult};
pub use schema::{Attribute, AttributeType, Schema};
pub use snapshot::TimeSnapshot;
pub use type_name::{NOW_SUFFIX, now_type_name};
pub use value::{AttributeValue, State};
