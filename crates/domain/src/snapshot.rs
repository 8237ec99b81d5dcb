//! Calendar snapshot of a single instant.
//!
//! A [`TimeSnapshot`] is built from exactly one UTC instant, so every field
//! describes the same second.

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::value::{AttributeValue, State};

/// Attribute name of the day of month.
pub const DAY: &str = "day";
/// Attribute name of the hour.
pub const HOUR: &str = "hour";
/// Attribute name of the minute.
pub const MINUTE: &str = "minute";
/// Attribute name of the month.
pub const MONTH: &str = "month";
/// Attribute name of the RFC3339 timestamp.
pub const RFC3339: &str = "rfc3339";
/// Attribute name of the second.
pub const SECOND: &str = "second";
/// Attribute name of the Unix epoch seconds.
pub const UNIX: &str = "unix";
/// Attribute name of the year.
pub const YEAR: &str = "year";

/// The current time decomposed into calendar fields.
///
/// Fields are declared in the same (alphabetical) order the host uses as
/// lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSnapshot {
    /// Day of month, 1-31.
    pub day: i64,
    /// Hour, 0-23.
    pub hour: i64,
    /// Minute, 0-59.
    pub minute: i64,
    /// Month, 1-12.
    pub month: i64,
    /// `YYYY-MM-DDTHH:MM:SSZ`.
    pub rfc3339: String,
    /// Second, 0-59.
    pub second: i64,
    /// Seconds since 1970-01-01T00:00:00Z.
    pub unix: i64,
    /// Calendar year.
    pub year: i64,
}

impl TimeSnapshot {
    /// Decomposes `instant` into a snapshot.
    ///
    /// Sub-second precision is dropped. A leap second is reported as second 59.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        let instant = instant.with_nanosecond(0).unwrap_or(instant);

        Self {
            day: i64::from(instant.day()),
            hour: i64::from(instant.hour()),
            minute: i64::from(instant.minute()),
            month: i64::from(instant.month()),
            rfc3339: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            second: i64::from(instant.second()),
            unix: instant.timestamp(),
            year: i64::from(instant.year()),
        }
    }

    /// Returns the instant this snapshot describes, at second precision.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.unix, 0)
    }

    /// Converts the snapshot into attribute values keyed by attribute name.
    #[must_use]
    pub fn into_state(self) -> State {
        let mut state = State::new();
        state.insert(DAY, AttributeValue::Int64(self.day));
        state.insert(HOUR, AttributeValue::Int64(self.hour));
        state.insert(MINUTE, AttributeValue::Int64(self.minute));
        state.insert(MONTH, AttributeValue::Int64(self.month));
        state.insert(RFC3339, AttributeValue::String(self.rfc3339));
        state.insert(SECOND, AttributeValue::Int64(self.second));
        state.insert(UNIX, AttributeValue::Int64(self.unix));
        state.insert(YEAR, AttributeValue::Int64(self.year));
        state
    }
}
