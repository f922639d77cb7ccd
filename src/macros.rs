/// Captures the source location of the call site.
///
/// The function name is the path of the enclosing function, with closure frames stripped.
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(::std::file!(), $crate::__function!(), ::std::line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        name[..name.len() - 3].trim_end_matches("::{{closure}}")
    }};
}

/// Logs a message through the given dispatcher.
///
/// The subsystem and category are anything convertible into `Option<&str>`. Formatting happens
/// lazily, only if the installed handler asks for the message.
///
/// ```
/// #[macro_use] extern crate switchlog;
///
/// use switchlog::{Dispatcher, Level};
///
/// fn main() {
///     let dispatcher = Dispatcher::default();
///
///     log_to!(dispatcher, Level::Info, "com.myapp", "Weather", "The temperature is {}", 25);
///     log_to!(dispatcher, Level::Debug, None, None, "no handler, no formatting");
/// }
/// ```
#[macro_export]
macro_rules! log_to {
    ($dispatcher:expr, $level:expr, $subsystem:expr, $category:expr, $($arg:tt)+) => {{
        let subsystem: ::std::option::Option<&str> = ::std::convert::Into::into($subsystem);
        let category: ::std::option::Option<&str> = ::std::convert::Into::into($category);

        $dispatcher.log(&|| ::std::format!($($arg)+), $level, subsystem, category,
            $crate::location!())
    }};
}

/// Logs a message through the process-wide dispatcher.
///
/// ```
/// #[macro_use] extern crate switchlog;
///
/// use switchlog::Level;
///
/// fn main() {
///     // Inhibit whatever the default selection installed.
///     switchlog::set_handler(None);
///
///     log!(Level::Warning, "com.myapp", None, "disk is {}% full", 93);
/// }
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log_to!($crate::bootstrap::dispatcher(), $level, $subsystem, $category, $($arg)+)
    };
}

/// Logs a message at the `Verbose` level through the process-wide dispatcher.
#[macro_export]
macro_rules! verbose {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Verbose, $subsystem, $category, $($arg)+)
    };
}

/// Logs a message at the `Debug` level through the process-wide dispatcher.
#[macro_export]
macro_rules! debug {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $subsystem, $category, $($arg)+)
    };
}

/// Logs a message at the `Info` level through the process-wide dispatcher.
#[macro_export]
macro_rules! info {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $subsystem, $category, $($arg)+)
    };
}

/// Logs a message at the `Warning` level through the process-wide dispatcher.
#[macro_export]
macro_rules! warning {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $subsystem, $category, $($arg)+)
    };
}

/// Logs a message at the `Error` level through the process-wide dispatcher.
#[macro_export]
macro_rules! error {
    ($subsystem:expr, $category:expr, $($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $subsystem, $category, $($arg)+)
    };
}
