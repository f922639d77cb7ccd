use std::io::{self, stderr, stdout, Write};
use std::process;

use chrono::Local;

use crate::handler::Handler;
use crate::level::Level;
use crate::record::Record;
use crate::thread;

/// Standard stream a console handler writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

/// Prints every record to the terminal.
///
/// This handler is always available, but it logs unconditionally at all levels and takes the
/// stream lock for each line. It fits development builds and quick experiments rather than
/// high-volume production logging.
///
/// Each record becomes a single line:
///
/// ```text
/// {timestamp} {level:.1} [{thread:#x}/{pid}] {subsystem}/{category} - {message}
/// ```
#[derive(Debug, Clone)]
pub struct Console {
    target: Target,
    colored: bool,
}

impl Console {
    /// Constructs a plain, uncolored handler writing into stderr.
    pub fn new() -> Console {
        Console {
            target: Target::Stderr,
            colored: false,
        }
    }

    pub fn target(mut self, target: Target) -> Console {
        self.target = target;
        self
    }

    /// Enables ANSI escape sequences, coloring the level and dimming the metadata.
    pub fn colored(mut self, colored: bool) -> Console {
        self.colored = colored;
        self
    }

    /// Formats the given record into a single line, including the trailing newline.
    pub fn format(&self, rec: &Record, wr: &mut dyn Write) -> Result<(), io::Error> {
        let mut buf = Vec::with_capacity(256);

        self.dim(&mut buf, |buf| {
            write!(buf, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f"))
        })?;

        buf.write_all(b" ")?;
        if self.colored {
            write!(buf, "\x1B[38;5;{}m", color(rec.level()))?;
        }
        buf.write_all(&rec.level().as_str().as_bytes()[..1])?;
        if self.colored {
            buf.write_all(b"\x1B[0m")?;
        }

        self.dim(&mut buf, |buf| {
            write!(buf, " [{:#x}/{}]", thread::id(), process::id())?;

            match (rec.subsystem(), rec.category()) {
                (Some(subsystem), Some(category)) => write!(buf, " {}/{}", subsystem, category)?,
                (Some(name), None) | (None, Some(name)) => write!(buf, " {}", name)?,
                (None, None) => {}
            }

            buf.write_all(b" - ")
        })?;

        buf.write_all(rec.message().as_bytes())?;
        buf.write_all(b"\n")?;

        wr.write_all(&buf)
    }

    fn dim<F>(&self, buf: &mut Vec<u8>, f: F) -> Result<(), io::Error>
        where F: FnOnce(&mut Vec<u8>) -> Result<(), io::Error>
    {
        if self.colored {
            buf.write_all(b"\x1B[2m")?;
        }
        f(buf)?;
        if self.colored {
            buf.write_all(b"\x1B[0m")?;
        }

        Ok(())
    }
}

impl Default for Console {
    fn default() -> Console {
        Console::new()
    }
}

impl Handler for Console {
    fn handle(&self, rec: &Record) {
        // There is nowhere left to report a broken terminal to.
        let _ = match self.target {
            Target::Stdout => self.format(rec, &mut stdout().lock()),
            Target::Stderr => self.format(rec, &mut stderr().lock()),
        };
    }
}

fn color(level: Level) -> u8 {
    match level {
        Level::Error   => 9,
        Level::Warning => 3,
        Level::Info    => 2,
        Level::Debug   => 10,
        Level::Verbose => 11,
    }
}
