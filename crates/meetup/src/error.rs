//! Error types for the schedule and time-interval subsystems.

use thiserror::Error;

/// Errors that can occur while building or querying a schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeetupError {
    /// A clock string was malformed or an interval ended before it started
    #[error("Illegal time: {message}")]
    IllegalTime { message: String },

    /// A section was added without its course link
    #[error("Illegal section initialization: {message}")]
    IllegalSectionInitialization { message: String },

    /// The query needs at least one section on the given day
    #[error("No sections scheduled on {day}")]
    NoSections { day: String },

    /// A day tag other than "MWF" or "TR"
    #[error("Unknown day of week: {value:?}")]
    UnknownDayOfWeek { value: String },

    /// Configuration could not be read or parsed
    #[error("Config error: {message}")]
    Config { message: String },
}

impl MeetupError {
    pub(crate) fn illegal_time(message: impl Into<String>) -> Self {
        MeetupError::IllegalTime {
            message: message.into(),
        }
    }

    /// Returns true if this error came from parsing or validating a time.
    pub fn is_time_error(&self) -> bool {
        matches!(self, MeetupError::IllegalTime { .. })
    }

    /// Returns true if this error came from loading a `ScheduleConfig`.
    pub fn is_config_error(&self) -> bool {
        matches!(self, MeetupError::Config { .. })
    }
}

impl From<std::io::Error> for MeetupError {
    fn from(err: std::io::Error) -> Self {
        MeetupError::Config {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for MeetupError {
    fn from(err: serde_json::Error) -> Self {
        MeetupError::Config {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_error_classification() {
        let err = MeetupError::illegal_time("missing colon");
        assert!(err.is_time_error());
        assert!(!err.is_config_error());
        assert_eq!(err.to_string(), "Illegal time: missing colon");

        let err = MeetupError::NoSections {
            day: "TR".to_string(),
        };
        assert!(!err.is_time_error());
        assert_eq!(err.to_string(), "No sections scheduled on TR");
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: MeetupError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, MeetupError::Config { .. }));
        assert!(err.is_config_error());
    }
}
