//! A student's weekly schedule and the break/location queries over it.

mod config;
mod processor;
mod shared;
mod types;

pub use config::ScheduleConfig;
pub use processor::{BreakWindow, DaySummary, ScheduleProcessor};
pub use shared::SharedSchedule;
pub use types::*;

use chrono::{NaiveTime, Timelike};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{MeetupError, Result};
use crate::time::{parse_clock, BreakTime, CourseTime};

/// Sections a student attends, kept in two ordered lists: one for MWF and
/// one for TR.
///
/// Each list is sorted by [`CourseTime::compare_to`]. Two sections whose
/// times compare `Equal` (same start, same end minute) occupy the same
/// slot, and the one added first is kept.
///
/// `Schedule` has no internal locking. Wrap it in a [`SharedSchedule`] if
/// more than one thread needs to add sections.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    mwf_sections: Vec<Section>,
    tr_sections: Vec<Section>,
    config: ScheduleConfig,
}

impl Schedule {
    /// Creates an empty schedule with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty schedule with a custom config.
    pub fn with_config(config: ScheduleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mwf_sections: Vec::new(),
            tr_sections: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Adds a section on its own day-group.
    ///
    /// # Returns
    /// * `Ok(true)` - The section was stored
    /// * `Ok(false)` - A section with an equal time was already stored; the
    ///   schedule is unchanged
    /// * `Err(IllegalSectionInitialization)` - The section has no course
    pub fn add(&mut self, section: Section) -> Result<bool> {
        let day = section.day_of_week();
        if section.course().is_none() {
            return Err(MeetupError::IllegalSectionInitialization {
                message: format!("Course link is not set for {section}"),
            });
        }

        let sections = self.sections_mut(day);
        let mut index = sections.len();
        for (i, existing) in sections.iter().enumerate() {
            match section.compare_to(existing) {
                Ordering::Less => {
                    index = i;
                    break;
                }
                Ordering::Equal => {
                    debug!(
                        "Skipping {} on {}: slot already taken by {}",
                        section, day, existing
                    );
                    return Ok(false);
                }
                Ordering::Greater => {}
            }
        }

        debug!("Adding {} on {} at position {}", section, day, index);
        sections.insert(index, section);
        Ok(true)
    }

    /// Meeting time of the earliest section on `day`.
    pub fn start_time(&self, day: DayOfWeek) -> Option<&CourseTime> {
        self.sections(day).first().map(Section::course_time)
    }

    /// Meeting time of the latest section on `day`.
    pub fn end_time(&self, day: DayOfWeek) -> Option<&CourseTime> {
        self.sections(day).last().map(Section::course_time)
    }

    /// End of the last section on `day` as `"H:MM"`, e.g. `"15:00"`.
    pub fn time_done_classes_for_the_day(&self, day: DayOfWeek) -> Result<String> {
        self.end_time(day)
            .map(|time| time.end_time())
            .ok_or_else(|| MeetupError::NoSections {
                day: day.to_string(),
            })
    }

    /// Start times of the breaks on `day` that last at least `min_minutes`.
    ///
    /// A break starts where one section ends. The end of the last section
    /// on the day is always included, whatever the threshold.
    pub fn start_times_of_breaks(&self, day: DayOfWeek, min_minutes: i64) -> BTreeSet<String> {
        let sections = self.sections(day);
        let mut start_times = BTreeSet::new();

        for pair in sections.windows(2) {
            let (previous, next) = (pair[0].course_time(), pair[1].course_time());
            if previous.minutes_until(next) >= min_minutes {
                start_times.insert(previous.end_time());
            }
        }

        if let Some(last) = sections.last() {
            start_times.insert(last.course_time().end_time());
        }

        start_times
    }

    /// Start times of the breaks on `day` that last at least the configured
    /// `min_break_minutes` (two hours by default).
    pub fn two_hour_break_start_times(&self, day: DayOfWeek) -> BTreeSet<String> {
        self.start_times_of_breaks(day, self.config.min_break_minutes)
    }

    /// Breaks on `day` in order, ending with the break after the last
    /// section that runs to the configured end of day.
    ///
    /// Returns `None` if there are no sections on `day`. A gap whose end
    /// comes before its start, i.e. overlapping sections, is left out.
    pub fn break_times(&self, day: DayOfWeek) -> Option<Vec<BreakTime>> {
        let sections = self.sections(day);
        let last = sections.last()?;
        let mut breaks = Vec::with_capacity(sections.len());

        for pair in sections.windows(2) {
            let (previous, next) = (pair[0].course_time(), pair[1].course_time());
            match BreakTime::from_parts(
                previous.end_hour(),
                previous.end_minute(),
                next.start_hour(),
                next.start_minute(),
            ) {
                Ok(gap) => breaks.push(gap),
                Err(e) => {
                    warn!(
                        "Skipping break on {} between {} and {}: {}",
                        day, pair[0], pair[1], e
                    );
                }
            }
        }

        match BreakTime::new(&last.course_time().end_time(), &self.config.end_of_day) {
            Ok(gap) => breaks.push(gap),
            Err(e) => {
                warn!("Skipping end-of-day break on {} after {}: {}", day, last, e);
            }
        }

        Some(breaks)
    }

    /// Returns true if `day` has a break covering `hour:00` through one
    /// hour later (or the configured `proposed_break_minutes`).
    pub fn hour_break_at_certain_time(&self, day: DayOfWeek, hour: u32) -> bool {
        let Some(breaks) = self.break_times(day) else {
            return false;
        };

        let Some(proposed) = self.proposed_break(hour) else {
            debug!("No proposed break can start at hour {}", hour);
            return false;
        };

        breaks.iter().any(|gap| proposed.is_subset_of(gap))
    }

    fn proposed_break(&self, hour: u32) -> Option<BreakTime> {
        let end = hour
            .checked_mul(60)?
            .checked_add(self.config.proposed_break_minutes)?;
        BreakTime::from_parts(hour, 0, end / 60, end % 60).ok()
    }

    /// Building of the last section on `day` that has ended by `time_of_day`.
    ///
    /// `time_of_day` is a whole hour (`"9"`, `"14"`) or an `"H:MM"` time.
    /// Times are compared as minutes since midnight.
    pub fn where_am_i(&self, day: DayOfWeek, time_of_day: &str) -> Result<Option<Arc<Building>>> {
        let (hour, minute) = if time_of_day.contains(':') {
            parse_clock(time_of_day)?
        } else {
            let hour = time_of_day.parse::<u32>().map_err(|e| {
                MeetupError::illegal_time(format!("bad hour in {time_of_day:?}: {e}"))
            })?;
            (hour, 0)
        };

        Ok(self.building_at_minutes(day, i64::from(hour) * 60 + i64::from(minute)))
    }

    /// Same as [`Schedule::where_am_i`] for a `chrono` time of day.
    pub fn where_am_i_at(&self, day: DayOfWeek, time: NaiveTime) -> Option<Arc<Building>> {
        self.building_at_minutes(day, i64::from(time.hour()) * 60 + i64::from(time.minute()))
    }

    fn building_at_minutes(&self, day: DayOfWeek, minutes: i64) -> Option<Arc<Building>> {
        self.sections(day)
            .iter()
            .rev()
            .find(|section| section.course_time().end_minutes() <= minutes)
            .map(|section| Arc::clone(section.building()))
    }

    /// Sections on `day` in time order.
    pub fn sections(&self, day: DayOfWeek) -> &[Section] {
        match day {
            DayOfWeek::Mwf => &self.mwf_sections,
            DayOfWeek::Tr => &self.tr_sections,
        }
    }

    fn sections_mut(&mut self, day: DayOfWeek) -> &mut Vec<Section> {
        match day {
            DayOfWeek::Mwf => &mut self.mwf_sections,
            DayOfWeek::Tr => &mut self.tr_sections,
        }
    }

    /// Number of sections across both day-groups.
    pub fn len(&self) -> usize {
        self.mwf_sections.len() + self.tr_sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
