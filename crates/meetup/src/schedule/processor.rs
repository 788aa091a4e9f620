//! Per-day summaries of a schedule for presentation layers.

use serde::{Deserialize, Serialize};

use super::{DayOfWeek, Schedule};
use crate::time::BreakTime;

/// A break window ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub start: String,     // e.g., "10:00"
    pub end: String,       // e.g., "13:00"
    pub minutes: i64,
}

impl From<&BreakTime> for BreakWindow {
    fn from(gap: &BreakTime) -> Self {
        Self {
            start: gap.start_time(),
            end: gap.end_time(),
            minutes: gap.duration_minutes(),
        }
    }
}

/// Overview of one day-group of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: DayOfWeek,
    pub section_count: usize,
    /// Start of the first section, if any
    pub first_class: Option<String>,
    /// End of the last section, if any
    pub last_class_ends: Option<String>,
    pub breaks: Vec<BreakWindow>,
    /// Breaks at least `min_break_minutes` long, plus the end of the day
    pub long_break_starts: Vec<String>,
}

/// Computes summaries from a schedule
pub struct ScheduleProcessor<'a> {
    schedule: &'a Schedule,
}

impl<'a> ScheduleProcessor<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    /// Summarizes a single day-group.
    pub fn summarize(&self, day: DayOfWeek) -> DaySummary {
        let breaks = self
            .schedule
            .break_times(day)
            .unwrap_or_default()
            .iter()
            .map(BreakWindow::from)
            .collect();

        DaySummary {
            day,
            section_count: self.schedule.sections(day).len(),
            first_class: self.schedule.start_time(day).map(|t| t.start_time()),
            last_class_ends: self.schedule.end_time(day).map(|t| t.end_time()),
            breaks,
            long_break_starts: self
                .schedule
                .two_hour_break_start_times(day)
                .into_iter()
                .collect(),
        }
    }

    /// Summarizes both day-groups, MWF first.
    pub fn summarize_week(&self) -> Vec<DaySummary> {
        DayOfWeek::ALL
            .iter()
            .map(|day| self.summarize(*day))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Building, Course, Section};
    use crate::time::CourseTime;
    use std::sync::Arc;

    fn sample_schedule() -> Schedule {
        let building = Arc::new(Building::new("Hennings"));
        let course = Arc::new(Course::new("PHYS", 157));
        let mut schedule = Schedule::new();
        for (start, end) in [("9:00", "10:00"), ("13:00", "14:00")] {
            let section = Section::new(
                "101",
                DayOfWeek::Mwf,
                CourseTime::new(start, end).unwrap(),
                Arc::clone(&building),
            )
            .with_course(Arc::clone(&course));
            schedule.add(section).unwrap();
        }
        schedule
    }

    #[test]
    fn test_summarize_day() {
        let schedule = sample_schedule();
        let summary = ScheduleProcessor::new(&schedule).summarize(DayOfWeek::Mwf);

        assert_eq!(summary.section_count, 2);
        assert_eq!(summary.first_class.as_deref(), Some("9:00"));
        assert_eq!(summary.last_class_ends.as_deref(), Some("14:00"));
        assert_eq!(
            summary.breaks,
            vec![
                BreakWindow {
                    start: "10:00".to_string(),
                    end: "13:00".to_string(),
                    minutes: 180,
                },
                BreakWindow {
                    start: "14:00".to_string(),
                    end: "23:59".to_string(),
                    minutes: 599,
                },
            ]
        );
        assert_eq!(summary.long_break_starts, ["10:00", "14:00"]);
    }

    #[test]
    fn test_summarize_week_serializes() {
        let schedule = sample_schedule();
        let week = ScheduleProcessor::new(&schedule).summarize_week();
        assert_eq!(week.len(), 2);

        let tr = &week[1];
        assert_eq!(tr.day, DayOfWeek::Tr);
        assert_eq!(tr.section_count, 0);
        assert!(tr.first_class.is_none());
        assert!(tr.breaks.is_empty());

        let json = serde_json::to_value(&week).unwrap();
        assert_eq!(json[0]["day"], "MWF");
        assert_eq!(json[0]["breaks"][0]["minutes"], 180);
    }
}
