use crate::handler::{Handler, SharedHandler};
use crate::level::Level;
use crate::record::{Location, Record};
use crate::registry::Registry;

/// The entry point all logging calls funnel through.
///
/// Dispatching is a synchronous call-through: the handler, if any, runs on the caller's thread and
/// `log` returns only after it does. Without a handler nothing happens at all, the message producer
/// included.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Constructs a dispatcher routing into the given registry.
    pub fn new(registry: Registry) -> Dispatcher {
        Dispatcher {
            registry: registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Replaces the current handler, returning the previous one.
    pub fn set_handler(&self, handler: Option<SharedHandler>) -> Option<SharedHandler> {
        self.registry.set_handler(handler)
    }

    pub fn current_handler(&self) -> Option<SharedHandler> {
        self.registry.current_handler()
    }

    /// Routes a logging request to the installed handler.
    ///
    /// The message producer is passed through untouched: it's up to the handler whether to call it.
    pub fn log(&self,
               message: &dyn Fn() -> String,
               level: Level,
               subsystem: Option<&str>,
               category: Option<&str>,
               location: Location)
    {
        if let Some(handler) = self.registry.current_handler() {
            handler.handle(&Record::new(message, level, subsystem, category, location));
        }
    }
}
