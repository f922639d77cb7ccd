//! Demonstrates routing records into the console handler and back out.

#[macro_use] extern crate switchlog;

use std::sync::Arc;

use switchlog::handler::Console;
use switchlog::handler::console::Target;

fn main() {
    // The console handler prints everything, in color if asked to.
    let default = switchlog::set_handler(Some(Arc::new(Console::new().target(Target::Stdout).colored(true))));

    verbose!("com.myapp", "HTTP", "{} {} HTTP/1.1 {} {}", "GET", "/static/image.png", 404, 347);
    debug!("com.myapp", None, "nginx/1.6 configured");
    info!("com.myapp", "Weather", "The temperature is {}", 25);
    warning!(None, "HTTP", "client stopped connection before send body completed");
    error!("com.myapp", "Files", "file does not exist: {}", "/var/www/favicon.ico");

    // Temporarily silence everything.
    {
        let registry = switchlog::bootstrap::dispatcher().registry();
        let _silence = registry.replace(None);

        info!("com.myapp", None, "never printed");
    }

    info!("com.myapp", None, "printed again");

    // Back to whatever the default selection found.
    switchlog::set_handler(default);
}
