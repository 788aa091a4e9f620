use super::{event_time_kind, EventTime};

/// Free time between two sections, or between the last section and the
/// end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreakTime(EventTime);

event_time_kind!(BreakTime);

impl BreakTime {
    /// Returns true if this break lies within `other`, bounds inclusive.
    pub fn is_subset_of(&self, other: &BreakTime) -> bool {
        self.starts_later_than_or_equal(other) && self.ends_sooner_than_or_equal(other)
    }

    /// Returns true if this break starts at the same time as `other` or later.
    pub fn starts_later_than_or_equal(&self, other: &BreakTime) -> bool {
        self.start_hour() > other.start_hour()
            || (self.start_hour() == other.start_hour()
                && self.start_minute() >= other.start_minute())
    }

    /// Returns true if this break ends at the same time as `other` or sooner.
    pub fn ends_sooner_than_or_equal(&self, other: &BreakTime) -> bool {
        self.end_hour() < other.end_hour()
            || (self.end_hour() == other.end_hour() && self.end_minute() <= other.end_minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(start: &str, end: &str) -> BreakTime {
        BreakTime::new(start, end).unwrap()
    }

    #[test]
    fn test_subset_strictly_inside() {
        let afternoon = gap("12:00", "16:00");
        assert!(gap("13:00", "14:00").is_subset_of(&afternoon));
        assert!(!afternoon.is_subset_of(&gap("13:00", "14:00")));
    }

    #[test]
    fn test_subset_shared_bounds() {
        let afternoon = gap("12:00", "16:00");
        assert!(gap("12:00", "13:00").is_subset_of(&afternoon));
        assert!(gap("15:00", "16:00").is_subset_of(&afternoon));
        assert!(afternoon.is_subset_of(&afternoon));
    }

    #[test]
    fn test_subset_overhanging() {
        let afternoon = gap("12:30", "16:00");
        assert!(!gap("12:00", "13:00").is_subset_of(&afternoon));
        assert!(!gap("15:30", "16:30").is_subset_of(&afternoon));
        assert!(!gap("17:00", "18:00").is_subset_of(&afternoon));
    }

    #[test]
    fn test_start_and_end_comparisons() {
        let a = gap("10:15", "11:45");
        let b = gap("10:15", "11:30");
        assert!(a.starts_later_than_or_equal(&b));
        assert!(b.starts_later_than_or_equal(&a));
        assert!(b.ends_sooner_than_or_equal(&a));
        assert!(!a.ends_sooner_than_or_equal(&b));

        let c = gap("9:59", "12:00");
        assert!(a.starts_later_than_or_equal(&c));
        assert!(!c.starts_later_than_or_equal(&a));
    }
}
