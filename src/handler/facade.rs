//! Integration with the Standard Logging Library.

use std::sync::Arc;

use log::{LevelFilter, Metadata};

use crate::handler::{Handler, SharedHandler};
use crate::record::Record;

/// Forwards records into whatever logger is installed behind the `log` crate facade.
///
/// The subsystem becomes the `log` target (falling back to the calling function path), and the
/// category, if any, prefixes the message as `[category] `. The message is produced only when the
/// underlying logger reports the record as enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Facade;

impl Handler for Facade {
    fn handle(&self, rec: &Record) {
        let logger = log::logger();
        let target = rec.subsystem().unwrap_or(rec.location().function);

        let metadata = Metadata::builder()
            .level(rec.level().into())
            .target(target)
            .build();

        if !logger.enabled(&metadata) {
            return;
        }

        let message = rec.message();
        let args = match rec.category() {
            Some(category) => format!("[{}] {}", category, message),
            None => message,
        };

        let location = rec.location();
        logger.log(&log::Record::builder()
            .metadata(metadata)
            .args(format_args!("{}", args))
            .module_path(Some(module_path(location.function)))
            .file(Some(location.file))
            .line(Some(location.line))
            .build());
    }
}

/// Strips the function name off a function path, leaving its module.
fn module_path(function: &str) -> &str {
    function.rsplit_once("::").map_or(function, |(module, _)| module)
}

/// Returns the facade handler if a `log` backend is active, `None` otherwise.
///
/// A backend counts as active once something raised the global maximum level above `Off`, which
/// every `log` implementation does when it's initialized.
pub fn probe() -> Option<SharedHandler> {
    if log::max_level() == LevelFilter::Off {
        None
    } else {
        Some(Arc::new(Facade))
    }
}
