use std::fmt::{self, Debug, Formatter};

use crate::Level;

/// Source code position of a logging call.
///
/// Carried verbatim from the call site to the handler. Usually built with the `location!` macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl Location {
    pub fn new(file: &'static str, function: &'static str, line: u32) -> Location {
        Location {
            file: file,
            function: function,
            line: line,
        }
    }
}

/// A single logging request, borrowed for the duration of one handler invocation.
///
/// The message text is not stored here. Instead a record holds the function producing it, so
/// handlers that drop the record never pay for formatting.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    message: &'a dyn Fn() -> String,
    level: Level,
    subsystem: Option<&'a str>,
    category: Option<&'a str>,
    location: Location,
}

impl<'a> Record<'a> {
    pub fn new(message: &'a dyn Fn() -> String,
               level: Level,
               subsystem: Option<&'a str>,
               category: Option<&'a str>,
               location: Location) -> Record<'a>
    {
        Record {
            message: message,
            level: level,
            subsystem: subsystem,
            category: category,
            location: location,
        }
    }

    /// Produces the message text.
    ///
    /// Each call invokes the producer again, so handlers should call it at most once.
    pub fn message(&self) -> String {
        (self.message)()
    }

    /// Returns the message producer itself, for handlers that forward it further.
    pub fn producer(&self) -> &'a dyn Fn() -> String {
        self.message
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Identifies the library or application owning the message.
    pub fn subsystem(&self) -> Option<&'a str> {
        self.subsystem
    }

    /// Identifies the area of code the message relates to.
    pub fn category(&self) -> Option<&'a str> {
        self.category
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl<'a> Debug for Record<'a> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        // The message is deliberately skipped: printing it would evaluate the producer.
        fmt.debug_struct("Record")
            .field("level", &self.level)
            .field("subsystem", &self.subsystem)
            .field("category", &self.category)
            .field("location", &self.location)
            .finish()
    }
}
