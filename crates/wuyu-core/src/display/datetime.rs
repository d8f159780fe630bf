//! DateTime display utilities.
//!
//! Template timestamps are absolute instants and render in the system time
//! zone. Activity schedules are civil (wall clock) times entered by teachers
//! and render as-is.

use std::fmt;

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

/// Formats a `Timestamp` in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
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

/// Formats an activity's start/end pair as a single schedule line.
///
/// Same-day ranges collapse to `YYYY-MM-DD HH:MM - HH:MM`; a missing bound
/// renders as `TBD`.
pub struct Schedule<'a> {
    pub start: Option<&'a DateTime>,
    pub end: Option<&'a DateTime>,
}

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start.date() == end.date() => write!(
                f,
                "{} - {}",
                start.strftime("%Y-%m-%d %H:%M"),
                end.strftime("%H:%M")
            ),
            (Some(start), Some(end)) => write!(
                f,
                "{} - {}",
                start.strftime("%Y-%m-%d %H:%M"),
                end.strftime("%Y-%m-%d %H:%M")
            ),
            (Some(start), None) => write!(f, "{} - TBD", start.strftime("%Y-%m-%d %H:%M")),
            (None, Some(end)) => write!(f, "TBD - {}", end.strftime("%Y-%m-%d %H:%M")),
            (None, None) => write!(f, "TBD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_same_day_schedule_collapses() {
        let start = date(2025, 4, 18).at(8, 30, 0, 0);
        let end = date(2025, 4, 18).at(16, 0, 0, 0);
        let schedule = Schedule {
            start: Some(&start),
            end: Some(&end),
        };
        assert_eq!(schedule.to_string(), "2025-04-18 08:30 - 16:00");
    }

    #[test]
    fn test_multi_day_and_open_schedules() {
        let start = date(2025, 4, 18).at(8, 0, 0, 0);
        let end = date(2025, 4, 19).at(12, 0, 0, 0);
        let schedule = Schedule {
            start: Some(&start),
            end: Some(&end),
        };
        assert_eq!(schedule.to_string(), "2025-04-18 08:00 - 2025-04-19 12:00");

        let open = Schedule {
            start: Some(&start),
            end: None,
        };
        assert_eq!(open.to_string(), "2025-04-18 08:00 - TBD");
        assert_eq!(
            Schedule {
                start: None,
                end: None
            }
            .to_string(),
            "TBD"
        );
    }
}
