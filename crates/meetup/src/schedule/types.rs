//! Types for sections and the places and courses they point at.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::MeetupError;
use crate::time::CourseTime;

/// The two weekly meeting patterns a section can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Monday, Wednesday, Friday
    #[serde(rename = "MWF")]
    Mwf,
    /// Tuesday, Thursday
    #[serde(rename = "TR")]
    Tr,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 2] = [DayOfWeek::Mwf, DayOfWeek::Tr];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Mwf => "MWF",
            DayOfWeek::Tr => "TR",
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = MeetupError;

    /// Accepts exactly `"MWF"` or `"TR"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MWF" => Ok(DayOfWeek::Mwf),
            "TR" => Ok(DayOfWeek::Tr),
            other => Err(MeetupError::UnknownDayOfWeek {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A campus building where sections meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,           // e.g., "Hugh Dempster Pavilion"
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Building {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude: None,
            longitude: None,
        }
    }
}

/// A course offering, e.g. CPSC 210.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    pub code: String,   // e.g., "CPSC"
    pub number: u32,    // e.g., 210
}

impl Course {
    pub fn new(code: impl Into<String>, number: u32) -> Self {
        Self {
            code: code.into(),
            number,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.number)
    }
}

/// A single meeting slot of a course on one day-group.
///
/// Buildings and courses are shared between sections, so they are held
/// behind `Arc` and handed back to callers by clone.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    day_of_week: DayOfWeek,
    course_time: CourseTime,
    building: Arc<Building>,
    course: Option<Arc<Course>>,
}

impl Section {
    pub fn new(
        name: impl Into<String>,
        day_of_week: DayOfWeek,
        course_time: CourseTime,
        building: Arc<Building>,
    ) -> Self {
        Self {
            name: name.into(),
            day_of_week,
            course_time,
            building,
            course: None,
        }
    }

    /// Links this section to its course.
    pub fn with_course(mut self, course: Arc<Course>) -> Self {
        self.course = Some(course);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.day_of_week
    }

    pub fn course_time(&self) -> &CourseTime {
        &self.course_time
    }

    pub fn building(&self) -> &Arc<Building> {
        &self.building
    }

    pub fn course(&self) -> Option<&Arc<Course>> {
        self.course.as_ref()
    }

    /// Orders sections by their meeting time.
    pub fn compare_to(&self, other: &Section) -> Ordering {
        self.course_time.compare_to(&other.course_time)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.course {
            Some(course) => write!(
                f,
                "{} {} {} {}",
                course, self.name, self.day_of_week, self.course_time
            ),
            None => write!(f, "{} {} {}", self.name, self.day_of_week, self.course_time),
        }
    }
}
