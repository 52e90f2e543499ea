//! Schedule timestamp handling.
//!
//! Departure and arrival times arrive as fixed-width `YYYY-MM-DDTHH:MM:SS`
//! strings with no zone offset. They are parsed into `NaiveDateTime` and
//! compared as wall-clock values.

use chrono::NaiveDateTime;

/// The only accepted timestamp layout, in `chrono` format syntax.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error returned when parsing an invalid timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimestampError {
    reason: &'static str,
}

impl TimestampError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Returns the reason the timestamp was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Parse a timestamp in `YYYY-MM-DDTHH:MM:SS` format.
///
/// `chrono` alone is lenient about field widths (it accepts `2024-1-5`),
/// so the layout is checked byte by byte before handing over.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::parse_timestamp;
///
/// assert!(parse_timestamp("2021-09-01T08:30:00").is_ok());
///
/// assert!(parse_timestamp("2021-09-01 08:30:00").is_err());
/// assert!(parse_timestamp("2021-9-01T08:30:00").is_err());
/// assert!(parse_timestamp("2021-09-01T24:00:00").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, TimestampError> {
    let bytes = s.as_bytes();

    if bytes.len() != 19 {
        return Err(TimestampError::new("expected YYYY-MM-DDTHH:MM:SS"));
    }

    for (idx, &b) in bytes.iter().enumerate() {
        let expected = match idx {
            4 | 7 => Some(b'-'),
            10 => Some(b'T'),
            13 | 16 => Some(b':'),
            _ => None,
        };
        match expected {
            Some(sep) if b != sep => {
                return Err(TimestampError::new("unexpected separator"));
            }
            None if !b.is_ascii_digit() => {
                return Err(TimestampError::new("expected digit"));
            }
            _ => {}
        }
    }

    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|_| TimestampError::new("date or time out of range"))
}

/// Format a timestamp back into `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_timestamp()(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,  // Safe for all months
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) -> String {
            format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}")
        }
    }

    proptest! {
        /// Any well-formed timestamp parses
        #[test]
        fn valid_parses(s in valid_timestamp()) {
            prop_assert!(parse_timestamp(&s).is_ok());
        }

        /// Parse then format returns the input
        #[test]
        fn parse_format_roundtrip(s in valid_timestamp()) {
            let parsed = parse_timestamp(&s).unwrap();
            prop_assert_eq!(format_timestamp(parsed), s);
        }

        /// A space in place of the `T` is always rejected
        #[test]
        fn space_separator_rejected(s in valid_timestamp()) {
            let spaced = s.replacen('T', " ", 1);
            prop_assert!(parse_timestamp(&spaced).is_err());
        }
    }
}
