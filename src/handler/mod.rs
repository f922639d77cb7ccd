use std::sync::Arc;

use crate::record::Record;

pub mod console;
pub mod facade;
#[cfg(unix)]
pub mod syslog;

#[cfg(not(unix))]
pub mod syslog {
    use super::SharedHandler;

    /// There is no syslog outside of unix.
    pub fn probe() -> Option<SharedHandler> {
        None
    }
}

pub use self::console::Console;
pub use self::facade::Facade;
#[cfg(unix)]
pub use self::syslog::Syslog;

/// The sink every logging request is routed into.
///
/// Handlers are responsible for deciding whether a record is worth anything, formatting it and
/// delivering it somewhere. They are invoked synchronously on the logging thread, possibly from
/// many threads at once, hence the `Send + Sync` bound.
///
/// Implementations should call [`Record::message`] at most once and only when the text is actually
/// needed. A handler should not panic under normal operation: the dispatcher does not catch
/// anything.
pub trait Handler: Send + Sync {
    /// Handles the given record.
    fn handle(&self, rec: &Record);
}

impl<F> Handler for F
    where F: Fn(&Record) + Send + Sync
{
    fn handle(&self, rec: &Record) {
        self(rec)
    }
}

/// A handler as stored in a registry.
pub type SharedHandler = Arc<dyn Handler>;

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::Level;
    use super::*;

    #[test]
    fn closure_is_a_handler() {
        let seen = Mutex::new(Vec::new());
        let handler = |rec: &Record| {
            seen.lock().unwrap().push(format!("{}:{}", rec.level(), rec.message()));
        };

        handler.handle(&Record::new(&|| "ready".to_string(), Level::Debug, None, None, location!()));

        assert_eq!(vec!["Debug:ready".to_string()], *seen.lock().unwrap());
    }

    #[test]
    fn closure_handler_can_be_shared() {
        let handler: SharedHandler = Arc::new(|_rec: &Record| {});
        let clone = handler.clone();

        clone.handle(&Record::new(&String::new, Level::Info, None, None, location!()));
        assert_eq!(2, Arc::strong_count(&handler));
    }
}
