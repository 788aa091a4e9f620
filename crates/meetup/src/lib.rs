//! A student's recurring weekly class schedule.
//!
//! Sections are added to a [`Schedule`], which keeps them ordered by
//! meeting time on each day-group (`MWF` or `TR`) and answers questions
//! about the day: when classes start and finish, where the breaks are,
//! whether an hour is free, and which building the student was last in.
//!
//! ```
//! use std::sync::Arc;
//! use meetup::{Building, Course, CourseTime, DayOfWeek, Schedule, Section};
//!
//! let course = Arc::new(Course::new("CPSC", 210));
//! let mut schedule = Schedule::new();
//! schedule.add(
//!     Section::new(
//!         "101",
//!         DayOfWeek::Mwf,
//!         CourseTime::new("9:00", "10:00")?,
//!         Arc::new(Building::new("ICICS")),
//!     )
//!     .with_course(course),
//! )?;
//!
//! assert_eq!(schedule.time_done_classes_for_the_day(DayOfWeek::Mwf)?, "10:00");
//! assert!(schedule.hour_break_at_certain_time(DayOfWeek::Mwf, 12));
//! # Ok::<(), meetup::MeetupError>(())
//! ```

pub mod error;
pub mod schedule;
pub mod time;

pub use error::{MeetupError, Result};
pub use schedule::{
    BreakWindow, Building, Course, DayOfWeek, DaySummary, Schedule, ScheduleConfig,
    ScheduleProcessor, Section, SharedSchedule,
};
pub use time::{BreakTime, CourseTime, EventTime};

#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
