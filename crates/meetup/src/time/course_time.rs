use super::{event_time_kind, EventTime};

/// The meeting interval of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseTime(EventTime);

event_time_kind!(CourseTime);
