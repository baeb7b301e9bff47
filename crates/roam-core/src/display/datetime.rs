//! DateTime display utilities.
//!
//! Service timestamps are UTC; they are shown in the system time zone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in the system time zone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_datetime_shape() {
        let ts: Timestamp = "2025-06-01T10:00:00Z".parse().unwrap();
        let rendered = LocalDateTime(&ts).to_string();
        // Date part may shift with the local zone, but the layout is fixed.
        assert!(rendered.starts_with("2025-0"));
        assert_eq!(rendered.matches(':').count(), 2);
    }
}
