//! Handler forwarding records to the local syslog daemon through the POSIX syslog API.
//!
//! The connection itself is managed by libc: `openlog` is never called here, so the process name
//! becomes the syslog identity and the application keeps control over `openlog` settings.

use std::ffi::CString;
use std::fs;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;
use std::sync::Arc;

use libc::c_int;

use crate::handler::{Handler, SharedHandler};
use crate::level::Level;
use crate::record::Record;

/// Well-known locations of the local syslog socket: BSD and Linux, Darwin, FreeBSD and NetBSD.
const SOCKETS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Sends every record to syslog as `subsystem/category: message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Syslog;

impl Syslog {
    /// Maps a level onto the syslog priority.
    pub fn priority(level: Level) -> c_int {
        match level {
            Level::Verbose | Level::Debug => libc::LOG_DEBUG,
            Level::Info    => libc::LOG_INFO,
            Level::Warning => libc::LOG_WARNING,
            Level::Error   => libc::LOG_ERR,
        }
    }

    /// Formats the line to be sent, with interior NUL bytes dropped.
    pub fn format(rec: &Record) -> CString {
        let mut line = match (rec.subsystem(), rec.category()) {
            (Some(subsystem), Some(category)) => format!("{}/{}: ", subsystem, category),
            (Some(name), None) | (None, Some(name)) => format!("{}: ", name),
            (None, None) => String::new(),
        };
        line.push_str(&rec.message());

        let mut bytes = line.into_bytes();
        bytes.retain(|&b| b != 0);

        // No NUL bytes are left at this point.
        CString::new(bytes).unwrap_or_default()
    }
}

impl Handler for Syslog {
    fn handle(&self, rec: &Record) {
        let line = Syslog::format(rec);

        unsafe {
            libc::syslog(Syslog::priority(rec.level()), c"%s".as_ptr(), line.as_ptr());
        }
    }
}

/// Returns the syslog handler if a local syslog socket exists, `None` otherwise.
pub fn probe() -> Option<SharedHandler> {
    probe_at(&SOCKETS)
}

/// Returns the syslog handler if any of the given paths is a Unix socket.
///
/// Mere existence is not enough: with systemd `/var/run/log` is the journal's directory.
pub fn probe_at<P: AsRef<Path>>(paths: &[P]) -> Option<SharedHandler> {
    if paths.iter().any(|path| is_socket(path.as_ref())) {
        Some(Arc::new(Syslog))
    } else {
        None
    }
}

fn is_socket(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.file_type().is_socket())
        .unwrap_or(false)
}
