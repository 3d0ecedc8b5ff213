use chrono::{NaiveTime, Timelike};

use crate::error::AppError;

/// Parse a local wall-clock `HH:MM` string into minutes since midnight.
/// Anything outside `00:00..23:59` or not exactly two-digit `HH:MM` is a
/// format error.
pub fn parse_minutes(s: &str) -> Result<u16, AppError> {
    let parsed = (s.len() == 5)
        .then(|| NaiveTime::parse_from_str(s, "%H:%M").ok())
        .flatten()
        .ok_or_else(|| AppError::Validation(format!("invalid time '{s}', expected HH:MM")))?;
    Ok((parsed.hour() * 60 + parsed.minute()) as u16)
}

pub fn format_minutes(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Half-open interval overlap: `[a_start, a_end)` against `[b_start, b_end)`.
/// Touching intervals (one ends exactly where the other starts) do not
/// overlap, so back-to-back sessions never conflict.
pub fn overlaps(a_start: u16, a_end: u16, b_start: u16, b_end: u16) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_minutes("09:30").unwrap(), 570);
        assert_eq!(parse_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for raw in ["24:00", "12:60", "9:00", "0900", "12:3", "", "ab:cd", "12:00:00"] {
            assert!(parse_minutes(raw).is_err(), "'{raw}' must be rejected");
        }
    }

    #[test]
    fn format_round_trips() {
        for raw in ["00:00", "07:05", "12:30", "23:59"] {
            assert_eq!(format_minutes(parse_minutes(raw).unwrap()), raw);
        }
    }

    #[test]
    fn overlap_basic_cases() {
        // candidate starts inside existing
        assert!(overlaps(630, 690, 600, 660));
        // candidate ends inside existing
        assert!(overlaps(570, 630, 600, 660));
        // candidate encloses existing
        assert!(overlaps(540, 720, 600, 660));
        // existing encloses candidate
        assert!(overlaps(610, 620, 600, 660));
        // disjoint
        assert!(!overlaps(540, 600, 660, 720));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!overlaps(540, 600, 600, 660));
        assert!(!overlaps(600, 660, 540, 600));
    }
}
