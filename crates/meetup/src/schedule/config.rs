//! Tunable thresholds for break-window queries.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{MeetupError, Result};
use crate::time::parse_clock;

/// Break-window settings for a `Schedule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Shortest gap, in minutes, reported by `two_hour_break_start_times`
    pub min_break_minutes: i64,
    /// Time the trailing break of each day runs until
    pub end_of_day: String,
    /// Length of the window checked by `hour_break_at_certain_time`
    pub proposed_break_minutes: u32,
}

impl ScheduleConfig {
    /// Loads a config from a JSON file. Missing fields take their defaults.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON file
    ///
    /// # Returns
    /// * `Ok(ScheduleConfig)` - Parsed and validated configuration
    /// * `Err` - If the file can't be read, parsed or fails validation
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ScheduleConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that `end_of_day` parses and the thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        parse_clock(&self.end_of_day).map_err(|e| MeetupError::Config {
            message: format!("end_of_day: {e}"),
        })?;

        if self.min_break_minutes < 0 {
            return Err(MeetupError::Config {
                message: "min_break_minutes must not be negative".to_string(),
            });
        }

        if self.proposed_break_minutes == 0 {
            return Err(MeetupError::Config {
                message: "proposed_break_minutes must be positive".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            min_break_minutes: 120,
            end_of_day: "23:59".to_string(),
            proposed_break_minutes: 60,
        }
    }
}
