//! Application use cases (business logic orchestration).

mod take_snapshot;

pub use take_snapshot::*;
