//! Take snapshot use case.

use timenow_domain::TimeSnapshot;
use tracing::debug;

use crate::ports::Clock;

/// Use case for capturing the current time as a [`TimeSnapshot`].
///
/// Every call performs exactly one clock read.
#[derive(Debug, Clone)]
pub struct TakeSnapshot<C: Clock> {
    clock: C,
}

impl<C: Clock> TakeSnapshot<C> {
    /// Creates a new `TakeSnapshot` use case.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Reads the clock and decomposes the instant.
    pub fn execute(&self) -> TimeSnapshot {
        let snapshot = TimeSnapshot::from_instant(self.clock.now());
        debug!(rfc3339 = %snapshot.rfc3339, unix = snapshot.unix, "took time snapshot");
        snapshot
    }
}
