use std::cmp::Ordering;
use std::fmt;

use super::{format_clock, parse_clock};
use crate::error::{MeetupError, Result};

/// A closed interval of time within a single day, e.g. `9:00 to 10:20`.
///
/// Built from two `"H:MM"` strings. Hours and minutes are not range
/// checked, so `"25:75"` is accepted; the only invariant is that the
/// start does not come after the end. A zero-length interval is allowed.
///
/// # Ordering
///
/// `EventTime` does not implement `Ord`. [`EventTime::compare_to`] is the
/// ordering used to sort sections, and it is not antisymmetric: two
/// intervals with the same start but different end minutes each compare
/// as `Greater` than the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventTime {
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
}

impl EventTime {
    /// Parses `start` and `end` as `"H:MM"` clock strings.
    ///
    /// # Errors
    /// `IllegalTime` if either string lacks a colon after the hour, a
    /// component is not a number, or the start is after the end.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let (start_hour, start_minute) = parse_clock(start)?;
        let (end_hour, end_minute) = parse_clock(end)?;
        Self::from_parts(start_hour, start_minute, end_hour, end_minute)
    }

    /// Builds an interval from already-split hour and minute values.
    pub fn from_parts(
        start_hour: u32,
        start_minute: u32,
        end_hour: u32,
        end_minute: u32,
    ) -> Result<Self> {
        if (start_hour, start_minute) > (end_hour, end_minute) {
            return Err(MeetupError::illegal_time(format!(
                "start after end ({} > {})",
                format_clock(start_hour, start_minute),
                format_clock(end_hour, end_minute)
            )));
        }

        Ok(Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    /// Start as `"H:MM"`, e.g. `"9:00"` or `"14:30"`.
    pub fn start_time(&self) -> String {
        format_clock(self.start_hour, self.start_minute)
    }

    /// End as `"H:MM"`.
    pub fn end_time(&self) -> String {
        format_clock(self.end_hour, self.end_minute)
    }

    /// Minutes since midnight at which this interval starts.
    pub fn start_minutes(&self) -> i64 {
        i64::from(self.start_hour) * 60 + i64::from(self.start_minute)
    }

    /// Minutes since midnight at which this interval ends.
    pub fn end_minutes(&self) -> i64 {
        i64::from(self.end_hour) * 60 + i64::from(self.end_minute)
    }

    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes() - self.start_minutes()
    }

    /// Minutes from the end of this interval to the start of `next`.
    ///
    /// Negative when `next` starts before this interval ends.
    pub fn minutes_until(&self, next: &EventTime) -> i64 {
        let gap = next.start_minutes() - self.end_minutes();
        tracing::trace!(
            "gap from {} to {} is {} minutes",
            self.end_time(),
            next.start_time(),
            gap
        );
        gap
    }

    /// Orders intervals by start hour, then start minute, then end minute.
    ///
    /// When the starts match, equal end minutes give `Equal` and anything
    /// else gives `Greater`, whichever side ends first. End hours are never
    /// looked at. Sections whose times compare `Equal` here are treated as
    /// the same slot by `Schedule`.
    pub fn compare_to(&self, other: &EventTime) -> Ordering {
        match self.start_hour.cmp(&other.start_hour) {
            Ordering::Greater => Ordering::Greater,
            Ordering::Less => Ordering::Less,
            Ordering::Equal => {
                if self.start_minute < other.start_minute {
                    Ordering::Less
                } else if self.start_minute == other.start_minute
                    && self.end_minute == other.end_minute
                {
                    Ordering::Equal
                } else {
                    Ordering::Greater
                }
            }
        }
    }
}

impl AsRef<EventTime> for EventTime {
    fn as_ref(&self) -> &EventTime {
        self
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_time(), self.end_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(start: &str, end: &str) -> EventTime {
        EventTime::new(start, end).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        let t = time("9:00", "10:20");
        assert_eq!(t.start_hour(), 9);
        assert_eq!(t.start_minute(), 0);
        assert_eq!(t.end_hour(), 10);
        assert_eq!(t.end_minute(), 20);
        assert_eq!(t.start_time(), "9:00");
        assert_eq!(t.end_time(), "10:20");
        assert_eq!(t.to_string(), "9:00 to 10:20");
    }

    #[test]
    fn test_leading_zero_hour_is_not_rendered() {
        let t = time("09:05", "09:50");
        assert_eq!(t.start_time(), "9:05");
        assert_eq!(t.end_time(), "9:50");
    }

    #[test]
    fn test_zero_length_interval_is_allowed() {
        let t = time("12:30", "12:30");
        assert_eq!(t.duration_minutes(), 0);
    }

    #[test]
    fn test_out_of_range_components_are_accepted() {
        let t = time("23:00", "25:75");
        assert_eq!(t.end_minutes(), 25 * 60 + 75);
    }

    #[test]
    fn test_minutes_until() {
        let first = time("9:00", "10:00");
        assert_eq!(first.minutes_until(&time("13:00", "14:00")), 180);
        assert_eq!(first.minutes_until(&time("10:00", "10:50")), 0);
        assert_eq!(first.minutes_until(&time("9:30", "10:30")), -30);
    }

    #[test]
    fn test_missing_colon() {
        let err = EventTime::new("900", "10:00").unwrap_err();
        assert!(err.is_time_error());
        assert!(err.to_string().contains("missing colon"));

        let err = EventTime::new("9:00", ":30").unwrap_err();
        assert!(err.to_string().contains("missing colon"));
    }

    #[test]
    fn test_non_numeric_component() {
        assert!(EventTime::new("nine:00", "10:00").is_err());
        assert!(EventTime::new("9:", "10:00").is_err());
        assert!(EventTime::new("9:00", "10:0a").is_err());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let err = EventTime::new("11:00", "10:00").unwrap_err();
        assert!(err.to_string().contains("start after end"));

        let err = EventTime::new("10:45", "10:30").unwrap_err();
        assert!(err.to_string().contains("start after end"));

        assert!(EventTime::from_parts(10, 1, 10, 0).is_err());
    }

    #[test]
    fn test_compare_by_start() {
        let early = time("9:00", "10:00");
        let late = time("13:00", "14:00");
        assert_eq!(early.compare_to(&late), Ordering::Less);
        assert_eq!(late.compare_to(&early), Ordering::Greater);

        let a = time("9:00", "9:50");
        let b = time("9:30", "9:40");
        assert_eq!(a.compare_to(&b), Ordering::Less);
        assert_eq!(b.compare_to(&a), Ordering::Greater);
    }

    #[test]
    fn test_compare_equal_slots() {
        let a = time("9:00", "10:00");
        let b = time("9:00", "11:00");
        // Same start and end minute: the end hour is not consulted.
        assert_eq!(a.compare_to(&b), Ordering::Equal);
        assert_eq!(a.compare_to(&a), Ordering::Equal);
    }

    #[test]
    fn test_compare_same_start_different_end_is_not_antisymmetric() {
        let a = time("9:00", "9:50");
        let b = time("9:00", "9:20");
        assert_eq!(a.compare_to(&b), Ordering::Greater);
        assert_eq!(b.compare_to(&a), Ordering::Greater);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(time("9:00", "10:00"), time("09:00", "10:00"));
        assert_ne!(time("9:00", "10:00"), time("9:00", "11:00"));
    }
}
