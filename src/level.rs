use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Logging levels, ordered from the most detailed to the most severe.
///
/// The dispatcher never looks at the level; the ordering exists for handlers that want to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Detailed technical information.
    Verbose,
    /// Information useful for debugging.
    Debug,
    /// Information that may be helpful for troubleshooting errors.
    Info,
    /// Conditions which might lead to a failure.
    Warning,
    /// Failures.
    Error,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Verbose,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
    ];

    /// Returns an integer level representation.
    pub fn as_i32(&self) -> i32 {
        match *self {
            Level::Verbose => 0,
            Level::Debug   => 1,
            Level::Info    => 2,
            Level::Warning => 3,
            Level::Error   => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Level::Verbose => "Verbose",
            Level::Debug   => "Debug",
            Level::Info    => "Info",
            Level::Warning => "Warning",
            Level::Error   => "Error",
        }
    }
}

impl Display for Level {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.pad(self.as_str())
    }
}

/// Returned when a string does not name any level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl Display for ParseLevelError {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "unknown level \"{}\"", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(val: &str) -> Result<Level, ParseLevelError> {
        Level::ALL.iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(val))
            .cloned()
            .ok_or_else(|| ParseLevelError(val.to_string()))
    }
}

impl From<Level> for log::Level {
    fn from(level: Level) -> log::Level {
        match level {
            Level::Verbose => log::Level::Trace,
            Level::Debug   => log::Level::Debug,
            Level::Info    => log::Level::Info,
            Level::Warning => log::Level::Warn,
            Level::Error   => log::Level::Error,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Level {
        match level {
            log::Level::Trace => Level::Verbose,
            log::Level::Debug => Level::Debug,
            log::Level::Info  => Level::Info,
            log::Level::Warn  => Level::Warning,
            log::Level::Error => Level::Error,
        }
    }
}
