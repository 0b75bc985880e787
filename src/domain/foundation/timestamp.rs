//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// RFC 3339 rendering used when the timestamp is embedded in a JSON record.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(*ts.as_datetime() >= before);
        assert!(*ts.as_datetime() <= after);
    }

    #[test]
    fn timestamp_from_datetime_preserves_value() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(*ts.as_datetime(), dt);
    }

    #[test]
    fn timestamp_renders_rfc3339() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(Timestamp::from_datetime(dt).to_rfc3339(), "2024-01-15T10:30:00+00:00");
    }

    #[test]
    fn timestamp_ordering_works() {
        let earlier = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let later = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert!(earlier < later);
    }
}
