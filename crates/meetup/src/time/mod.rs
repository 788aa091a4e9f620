//! Time-of-day intervals parsed from `"H:MM"` strings.
//!
//! [`EventTime`] holds the interval logic. [`CourseTime`] and [`BreakTime`]
//! wrap it to mark what the interval means: a section's meeting time or a
//! gap between sections. All three compare structurally, so a `CourseTime`
//! equals a `BreakTime` spanning the same minutes.

mod break_time;
mod course_time;
mod event_time;

pub use break_time::BreakTime;
pub use course_time::CourseTime;
pub use event_time::EventTime;

use crate::error::{MeetupError, Result};

/// Splits an `"H:MM"` string into hour and minute.
///
/// The colon must appear after at least one character. Neither component
/// is range checked.
pub fn parse_clock(value: &str) -> Result<(u32, u32)> {
    let (hour, minute) = match value.split_once(':') {
        Some((hour, minute)) if !hour.is_empty() => (hour, minute),
        _ => {
            return Err(MeetupError::illegal_time(format!(
                "missing colon in {value:?}"
            )))
        }
    };

    let hour = hour
        .parse::<u32>()
        .map_err(|e| MeetupError::illegal_time(format!("bad hour in {value:?}: {e}")))?;
    let minute = minute
        .parse::<u32>()
        .map_err(|e| MeetupError::illegal_time(format!("bad minute in {value:?}: {e}")))?;

    Ok((hour, minute))
}

/// Renders a clock value as `"H:MM"`: no hour padding, two-digit minutes.
pub fn format_clock(hour: u32, minute: u32) -> String {
    format!("{hour}:{minute:02}")
}

/// Converts an `"H:MM"` string to minutes since midnight.
pub fn minutes_into_day(value: &str) -> Result<i64> {
    let (hour, minute) = parse_clock(value)?;
    Ok(i64::from(hour) * 60 + i64::from(minute))
}

/// Implements the shared surface of an `EventTime` newtype: construction,
/// deref to the inner interval, display, and cross-kind equality.
macro_rules! event_time_kind {
    ($kind:ident) => {
        impl $kind {
            /// Parses `start` and `end` as `"H:MM"` clock strings.
            pub fn new(start: &str, end: &str) -> $crate::error::Result<Self> {
                $crate::time::EventTime::new(start, end).map(Self)
            }

            pub fn from_parts(
                start_hour: u32,
                start_minute: u32,
                end_hour: u32,
                end_minute: u32,
            ) -> $crate::error::Result<Self> {
                $crate::time::EventTime::from_parts(start_hour, start_minute, end_hour, end_minute)
                    .map(Self)
            }

            pub fn event_time(&self) -> &$crate::time::EventTime {
                &self.0
            }
        }

        impl From<$crate::time::EventTime> for $kind {
            fn from(time: $crate::time::EventTime) -> Self {
                Self(time)
            }
        }

        impl std::ops::Deref for $kind {
            type Target = $crate::time::EventTime;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<$crate::time::EventTime> for $kind {
            fn as_ref(&self) -> &$crate::time::EventTime {
                &self.0
            }
        }

        impl std::fmt::Display for $kind {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl PartialEq<$crate::time::EventTime> for $kind {
            fn eq(&self, other: &$crate::time::EventTime) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$kind> for $crate::time::EventTime {
            fn eq(&self, other: &$kind) -> bool {
                *self == other.0
            }
        }
    };
}

pub(crate) use event_time_kind;

impl PartialEq<BreakTime> for CourseTime {
    fn eq(&self, other: &BreakTime) -> bool {
        self.event_time() == other.event_time()
    }
}

impl PartialEq<CourseTime> for BreakTime {
    fn eq(&self, other: &CourseTime) -> bool {
        self.event_time() == other.event_time()
    }
}
