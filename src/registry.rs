use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::handler::{Handler, SharedHandler};

/// Holds the single handler all logging requests are routed into.
///
/// The registry is a cheap handle: clones share the same slot, while registries created with
/// `Registry::new` are completely isolated from each other. An application usually owns one and
/// passes it around, or uses the process-wide one behind the crate level functions.
///
/// The lock is held only to copy or swap the shared pointer, never while a handler runs. A logging
/// call that has already taken its snapshot may therefore complete using a handler that was
/// replaced in the meantime.
#[derive(Clone, Default)]
pub struct Registry {
    handler: Arc<Mutex<Option<SharedHandler>>>,
}

impl Registry {
    /// Constructs an empty registry. Records are silently dropped until a handler is installed.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Replaces the current handler with the given one, returning the previously installed handler.
    ///
    /// Passing `None` disables logging. Concurrent calls are serialized, so each one observes the
    /// handler that was current immediately before it.
    pub fn set_handler(&self, handler: Option<SharedHandler>) -> Option<SharedHandler> {
        mem::replace(&mut *self.lock(), handler)
    }

    /// Returns the currently installed handler, if any.
    pub fn current_handler(&self) -> Option<SharedHandler> {
        self.lock().clone()
    }

    /// Installs the given handler, returning the previous one.
    pub fn install<H>(&self, handler: H) -> Option<SharedHandler>
        where H: Handler + 'static
    {
        self.set_handler(Some(Arc::new(handler)))
    }

    /// Removes the current handler, returning it.
    pub fn clear(&self) -> Option<SharedHandler> {
        self.set_handler(None)
    }

    /// Temporarily overrides the current handler.
    ///
    /// The previous handler is installed back when the returned guard is dropped, regardless of
    /// what was installed in between.
    pub fn replace(&self, handler: Option<SharedHandler>) -> Override {
        Override {
            registry: self.clone(),
            previous: Some(self.set_handler(handler)),
        }
    }

    fn lock(&self) -> MutexGuard<Option<SharedHandler>> {
        // Nothing can panic while the lock is held, but poisoning must not break logging anyway.
        self.handler.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Debug for Registry {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Registry")
            .field("installed", &self.lock().is_some())
            .finish()
    }
}

/// Restores the overridden handler on drop.
#[must_use = "the previous handler is restored as soon as the guard is dropped"]
pub struct Override {
    registry: Registry,
    previous: Option<Option<SharedHandler>>,
}

impl Override {
    /// The handler that was current before the override, and that will be restored.
    pub fn previous(&self) -> Option<&SharedHandler> {
        self.previous.as_ref().and_then(Option::as_ref)
    }

    /// Keeps the override forever, returning the handler it replaced.
    pub fn forget(mut self) -> Option<SharedHandler> {
        self.previous.take().flatten()
    }
}

impl Drop for Override {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.registry.set_handler(previous);
        }
    }
}
