//! Default handler selection and the process-wide dispatcher.
//!
//! The core never picks a handler by itself. This module does it once, on the first use of the
//! process-wide dispatcher, by trying the built-in adapters in priority order: the `log` crate
//! facade if some backend is active, then the local syslog daemon. When neither is available
//! logging stays disabled until the application installs something explicitly.

use std::sync::OnceLock;

use crate::dispatcher::Dispatcher;
use crate::handler::{facade, syslog, SharedHandler};
use crate::registry::Registry;

/// Capability check for one adapter: returns the ready to use handler if its backend is available
/// on this host, `None` otherwise.
pub type Probe = fn() -> Option<SharedHandler>;

/// Built-in adapters in priority order.
pub const DEFAULT_PROBES: [Probe; 2] = [facade::probe, syslog::probe];

static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

/// Returns the handler of the first available adapter.
pub fn select(probes: &[Probe]) -> Option<SharedHandler> {
    probes.iter().find_map(|probe| probe())
}

/// Returns the process-wide dispatcher, selecting the default handler on first use.
///
/// Installing a handler explicitly replaces the default one, which is then returned as the previous
/// handler.
pub fn dispatcher() -> &'static Dispatcher {
    DISPATCHER.get_or_init(|| {
        let registry = Registry::new();
        registry.set_handler(select(&DEFAULT_PROBES));

        Dispatcher::new(registry)
    })
}
