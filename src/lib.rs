//! Small pluggable logging facility.
//!
//! Libraries and applications log through a single indirection point without binding to any
//! particular logging backend. Every record is routed into one swappable [`Handler`], and the
//! message text is produced lazily: when no handler is installed nothing is formatted at all.
//!
//! ```
//! #[macro_use] extern crate switchlog;
//!
//! use std::sync::Arc;
//!
//! use switchlog::handler::Console;
//!
//! fn main() {
//!     // Forward everything to the terminal, replacing the default handler.
//!     switchlog::set_handler(Some(Arc::new(Console::new())));
//!
//!     info!("com.myapp", "Weather", "The temperature is {}", 25);
//!
//!     // Inhibit logging.
//!     switchlog::set_handler(None);
//! }
//! ```
//!
//! By default the process-wide dispatcher forwards to the `log` crate if some backend is active,
//! otherwise to the local syslog daemon, otherwise nowhere. Applications that prefer explicit
//! wiring own a [`Registry`] and a [`Dispatcher`] instead.

#[macro_use] extern crate quick_error;

#[macro_use]
mod macros;

pub mod bootstrap;
pub mod config;
pub mod handler;
mod dispatcher;
mod level;
mod record;
mod registry;
mod thread;

pub use self::dispatcher::Dispatcher;
pub use self::handler::{Handler, SharedHandler};
pub use self::level::{Level, ParseLevelError};
pub use self::record::{Location, Record};
pub use self::registry::{Override, Registry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Replaces the handler of the process-wide dispatcher, returning the previous one.
pub fn set_handler(handler: Option<SharedHandler>) -> Option<SharedHandler> {
    bootstrap::dispatcher().set_handler(handler)
}

/// Returns the handler of the process-wide dispatcher.
pub fn current_handler() -> Option<SharedHandler> {
    bootstrap::dispatcher().current_handler()
}

/// Logs through the process-wide dispatcher. Not meant to be called directly, use macros instead.
pub fn log(message: &dyn Fn() -> String,
           level: Level,
           subsystem: Option<&str>,
           category: Option<&str>,
           location: Location)
{
    bootstrap::dispatcher().log(message, level, subsystem, category, location)
}
