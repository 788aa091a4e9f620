//! A schedule that can be shared between threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Schedule, Section};
use crate::error::Result;

/// One lock over both day-groups, so a reader never sees one list
/// mid-update.
pub struct SharedSchedule {
    schedule: Mutex<Schedule>,
}

impl SharedSchedule {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Mutex::new(schedule),
        }
    }

    /// Adds a section under the lock. See [`Schedule::add`].
    pub fn add(&self, section: Section) -> Result<bool> {
        self.lock().add(section)
    }

    /// Runs `f` with the schedule locked.
    pub fn read<T>(&self, f: impl FnOnce(&Schedule) -> T) -> T {
        f(&self.lock())
    }

    /// Returns the schedule, consuming the lock.
    pub fn into_inner(self) -> Schedule {
        self.schedule
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // `Schedule::add` leaves the lists untouched on error, so a poisoned
    // lock still guards a consistent schedule.
    fn lock(&self) -> MutexGuard<'_, Schedule> {
        self.schedule.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedSchedule {
    fn default() -> Self {
        Self::new(Schedule::new())
    }
}
