//! System clock adapter

use chrono::{DateTime, Utc};
use timenow_application::ports::Clock;

/// System clock implementation using the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timenow_application::use_cases::TakeSnapshot;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock::new();
        let now = clock.now();
        // Just verify it returns a reasonable timestamp
        assert!(now.timestamp() > 0);
    }

    #[test]
    fn test_successive_snapshots_do_not_go_backwards() {
        let use_case = TakeSnapshot::new(SystemClock::new());

        let mut previous = use_case.execute();
        for _ in 0..100 {
            let next = use_case.execute();
            assert!(next.unix >= previous.unix);
            previous = next;
        }
    }

    #[test]
    fn test_snapshot_rfc3339_matches_unix() {
        let snapshot = TakeSnapshot::new(SystemClock::new()).execute();
        let parsed = DateTime::parse_from_rfc3339(&snapshot.rfc3339)
            .expect("rfc3339 should parse");

        assert_eq!(parsed.timestamp(), snapshot.unix);
        assert!(snapshot.rfc3339.ends_with('Z'));
        assert!(snapshot.rfc3339.starts_with(&snapshot.year.to_string()));
    }
}
