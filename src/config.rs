//! Handler configuration from a generic JSON source.
//!
//! A config is an object whose `type` field names the handler, with any handler specific options
//! next to it:
//!
//! ```json
//! {"type": "console", "target": "stdout", "colored": true}
//! ```
//!
//! Built-in types are `console`, `facade`, `syslog`, `auto` (default selection) and `none`.
//! Requesting an adapter whose backend is unavailable on this host disables logging rather than
//! failing.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::bootstrap::{self, DEFAULT_PROBES};
use crate::handler::{facade, syslog, SharedHandler};
use crate::handler::console::{Console, Target};
use crate::registry::Registry;

pub type Config = Value;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            from()
            display("failed to read config: {}", err)
            source(err)
        }
        Json(err: serde_json::Error) {
            from()
            display("failed to parse config: {}", err)
            source(err)
        }
        MissingField(name: &'static str) {
            display("field \"{}\" is required", name)
        }
        InvalidField(name: &'static str, expected: &'static str) {
            display("field \"{}\" must be {}", name, expected)
        }
        UnknownType(ty: String) {
            display("handler with type \"{}\" not found", ty)
        }
    }
}

pub trait Factory: Send + Sync {
    /// Returns type as a string that is used mainly for concrete component identification.
    fn ty() -> &'static str where Self: Sized;

    /// Constructs a new handler by configuring it with the given config.
    ///
    /// Returns `None` when the handler's backend is not available.
    fn from(&self, cfg: &Config) -> Result<Option<SharedHandler>, Error>;
}

/// Maps handler types to the factories able to build them.
pub struct Catalog {
    factories: HashMap<&'static str, Box<dyn Factory>>,
}

impl Catalog {
    /// Constructs a catalog with all built-in handlers registered.
    pub fn new() -> Catalog {
        let mut result = Catalog::empty();
        result.add(ConsoleFactory);
        result.add(FacadeFactory);
        result.add(SyslogFactory);
        result.add(AutoFactory);
        result.add(NoneFactory);

        result
    }

    pub fn empty() -> Catalog {
        Catalog {
            factories: HashMap::new(),
        }
    }

    /// Registers the given factory, replacing one with the same type.
    pub fn add<F: Factory + 'static>(&mut self, factory: F) {
        self.factories.insert(F::ty(), Box::new(factory));
    }

    /// Builds a handler from the given config.
    pub fn handler(&self, cfg: &Config) -> Result<Option<SharedHandler>, Error> {
        let ty = string(cfg, "type")?.ok_or(Error::MissingField("type"))?;

        self.factories.get(ty)
            .ok_or_else(|| Error::UnknownType(ty.to_string()))?
            .from(cfg)
    }

    /// Builds a handler from the given config and installs it into the registry, returning the
    /// previously installed one.
    ///
    /// The registry is left untouched if the config is invalid.
    pub fn configure(&self, cfg: &Config, registry: &Registry) ->
        Result<Option<SharedHandler>, Error>
    {
        let handler = self.handler(cfg)?;

        Ok(registry.set_handler(handler))
    }
}

impl Default for Catalog {
    fn default() -> Catalog {
        Catalog::new()
    }
}

/// Parses a config from the given JSON string.
pub fn from_str(cfg: &str) -> Result<Config, Error> {
    Ok(serde_json::from_str(cfg)?)
}

/// Reads a config from the given JSON file.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config, Error> {
    let file = File::open(path)?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn string<'a>(cfg: &'a Config, name: &'static str) -> Result<Option<&'a str>, Error> {
    match cfg.get(name) {
        None => Ok(None),
        Some(val) => val.as_str()
            .map(Some)
            .ok_or(Error::InvalidField(name, "a string")),
    }
}

fn boolean(cfg: &Config, name: &'static str) -> Result<Option<bool>, Error> {
    match cfg.get(name) {
        None => Ok(None),
        Some(val) => val.as_bool()
            .map(Some)
            .ok_or(Error::InvalidField(name, "a boolean")),
    }
}

/// Options: `target` (`"stdout"` or `"stderr"`, default `"stderr"`), `colored` (default `false`).
pub struct ConsoleFactory;

impl Factory for ConsoleFactory {
    fn ty() -> &'static str {
        "console"
    }

    fn from(&self, cfg: &Config) -> Result<Option<SharedHandler>, Error> {
        let target = match string(cfg, "target")? {
            None | Some("stderr") => Target::Stderr,
            Some("stdout") => Target::Stdout,
            Some(..) => return Err(Error::InvalidField("target", "either \"stdout\" or \"stderr\"")),
        };

        let colored = boolean(cfg, "colored")?.unwrap_or(false);

        Ok(Some(Arc::new(Console::new().target(target).colored(colored))))
    }
}

pub struct FacadeFactory;

impl Factory for FacadeFactory {
    fn ty() -> &'static str {
        "facade"
    }

    fn from(&self, _cfg: &Config) -> Result<Option<SharedHandler>, Error> {
        Ok(facade::probe())
    }
}

pub struct SyslogFactory;

impl Factory for SyslogFactory {
    fn ty() -> &'static str {
        "syslog"
    }

    fn from(&self, _cfg: &Config) -> Result<Option<SharedHandler>, Error> {
        Ok(syslog::probe())
    }
}

/// Performs the same default selection as the process-wide dispatcher.
pub struct AutoFactory;

impl Factory for AutoFactory {
    fn ty() -> &'static str {
        "auto"
    }

    fn from(&self, _cfg: &Config) -> Result<Option<SharedHandler>, Error> {
        Ok(bootstrap::select(&DEFAULT_PROBES))
    }
}

/// Disables logging.
pub struct NoneFactory;

impl Factory for NoneFactory {
    fn ty() -> &'static str {
        "none"
    }

    fn from(&self, _cfg: &Config) -> Result<Option<SharedHandler>, Error> {
        Ok(None)
    }
}
