//! Configures the process-wide handler from a JSON file and writes some messages using it.
//!
//! ```text
//! cargo run --example config -- handler.json
//! ```
//!
//! with `handler.json` being, for example, `{"type": "console", "target": "stdout"}`.

#[macro_use] extern crate switchlog;

use std::env;
use std::process;

use switchlog::config::{self, Catalog};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("USAGE: config FILENAME");
            process::exit(2);
        }
    };

    let cfg = config::from_path(&path).and_then(|cfg| {
        Catalog::new().configure(&cfg, switchlog::bootstrap::dispatcher().registry())
    });

    if let Err(err) = cfg {
        eprintln!("failed to configure logging from {}: {}", path, err);
        process::exit(1);
    }

    debug!("com.myapp", "HTTP", "{} {} HTTP/1.1 {} {}", "GET", "/static/image.png", 404, 347);
    info!("com.myapp", None, "nginx/1.6 configured");
    warning!("com.myapp", "HTTP", "client stopped connection before send body completed");
    error!("com.myapp", "Files", "file does not exist: {}", "/var/www/favicon.ico");
}
