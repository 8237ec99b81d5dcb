//! Timenow Application - Ports, use cases and the data source boundary
//!
//! The application layer reads time only through the [`ports::Clock`]
//! port, so every operation is deterministic under test.

pub mod data_source;
pub mod error;
pub mod ports;
pub mod use_cases;

pub use data_source::{
    DataSource, Diagnostic, Diagnostics, MetadataRequest, MetadataResponse, ReadRequest,
    ReadResponse, Severity, TimeNowDataSource, time_now_schema,
};
pub use error::{ApplicationError, ApplicationResult};
