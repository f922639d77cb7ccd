#[macro_use] extern crate switchlog;

use std::sync::{Arc, Barrier, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use switchlog::{Dispatcher, Handler, Level, Record, Registry, SharedHandler};

struct MockHandler {
    counter: Arc<AtomicUsize>,
}

impl MockHandler {
    fn new() -> MockHandler {
        MockHandler {
            counter: Arc::new(AtomicUsize::new(0))
        }
    }

    fn counter(&self) -> Arc<AtomicUsize> {
        self.counter.clone()
    }
}

impl Handler for MockHandler {
    fn handle(&self, rec: &Record) {
        assert_eq!(Level::Info, rec.level());
        self.counter.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn log_without_handler() {
    let log = Dispatcher::default();

    log_to!(log, Level::Info, None, None, "file does not exist: /var/www/favicon.ico");
}

#[test]
fn log_calls_handler() {
    let handler = MockHandler::new();
    let counter = handler.counter();
    let log = Dispatcher::default();
    log.registry().install(handler);

    log_to!(log, Level::Info, None, None, "file does not exist: /var/www/favicon.ico");

    assert_eq!(1, counter.load(Ordering::SeqCst));
}

#[test]
fn log_calls_handler_after_clone() {
    let handler = MockHandler::new();
    let counter = handler.counter();
    let log1 = Dispatcher::default();
    log1.registry().install(handler);
    let log2 = log1.clone();

    log_to!(log1, Level::Info, None, None, "file does not exist: /var/www/favicon.ico");
    assert_eq!(1, counter.load(Ordering::SeqCst));

    log_to!(log2, Level::Info, None, None, "file does not exist: /var/www/favicon.ico");
    assert_eq!(2, counter.load(Ordering::SeqCst));
}

#[test]
fn log_calls_new_handler_after_swap() {
    let h1 = MockHandler::new();
    let h2 = MockHandler::new();
    let (c1, c2) = (h1.counter(), h2.counter());
    let log = Dispatcher::default();

    log.registry().install(h1);
    log_to!(log, Level::Info, None, None, "first");

    log.registry().install(h2);
    log_to!(log, Level::Info, None, None, "second");
    log_to!(log, Level::Info, None, None, "third");

    assert_eq!(1, c1.load(Ordering::SeqCst));
    assert_eq!(2, c2.load(Ordering::SeqCst));
}

#[test]
fn end_to_end() {
    let registry = Registry::new();
    let log = Dispatcher::new(registry.clone());
    let lines = Arc::new(Mutex::new(Vec::new()));

    {
        let lines = lines.clone();
        registry.install(move |rec: &Record| {
            lines.lock().unwrap().push(format!("{}:{}:{}:{}",
                rec.level(),
                rec.subsystem().unwrap_or(""),
                rec.category().unwrap_or(""),
                rec.message()));
        });
    }

    log.log(&|| "boot".to_string(), Level::Info, Some("core"), Some("init"), location!());
    assert_eq!(vec!["Info:core:init:boot".to_string()], *lines.lock().unwrap());

    assert!(registry.set_handler(None).is_some());

    let produced = AtomicUsize::new(0);
    log.log(&|| {
        produced.fetch_add(1, Ordering::SeqCst);
        "shutdown".to_string()
    }, Level::Info, Some("core"), Some("init"), location!());

    assert_eq!(vec!["Info:core:init:boot".to_string()], *lines.lock().unwrap());
    assert_eq!(0, produced.load(Ordering::SeqCst));
}

#[test]
fn in_flight_call_completes_with_snapshot() {
    let registry = Registry::new();
    let log = Dispatcher::new(registry.clone());
    let entered = Arc::new(Barrier::new(2));
    let swapped = Arc::new(Barrier::new(2));
    let slow = Arc::new(AtomicUsize::new(0));

    {
        let (entered, swapped, slow) = (entered.clone(), swapped.clone(), slow.clone());
        registry.install(move |_rec: &Record| {
            entered.wait();
            // Blocks until the main thread has replaced this very handler.
            swapped.wait();
            slow.fetch_add(1, Ordering::SeqCst);
        });
    }

    let thread = {
        let log = log.clone();
        thread::spawn(move || {
            log_to!(log, Level::Info, None, None, "in flight");
        })
    };

    entered.wait();
    let fast = MockHandler::new();
    let counter = fast.counter();
    assert!(registry.install(fast).is_some());
    swapped.wait();

    thread.join().unwrap();
    log_to!(log, Level::Info, None, None, "after swap");

    assert_eq!(1, slow.load(Ordering::SeqCst));
    assert_eq!(1, counter.load(Ordering::SeqCst));
}

#[test]
fn concurrent_logging_and_swapping() {
    const THREADS: usize = 4;
    const MESSAGES: usize = 1000;

    let registry = Registry::new();
    let log = Dispatcher::new(registry.clone());
    let total = Arc::new(AtomicUsize::new(0));

    let handler = || -> SharedHandler {
        let total = total.clone();
        Arc::new(move |rec: &Record| {
            assert_eq!("message", rec.message());
            total.fetch_add(1, Ordering::SeqCst);
        })
    };
    registry.set_handler(Some(handler()));

    let loggers: Vec<_> = (0..THREADS).map(|_| {
        let log = log.clone();
        thread::spawn(move || {
            for _ in 0..MESSAGES {
                log_to!(log, Level::Debug, "bench", None, "message");
            }
        })
    }).collect();

    for _ in 0..100 {
        assert!(registry.set_handler(Some(handler())).is_some());
    }

    for thread in loggers {
        thread.join().unwrap();
    }

    // Every handler counts into the same total, so no record got lost or duplicated by a swap.
    assert_eq!(THREADS * MESSAGES, total.load(Ordering::SeqCst));
}
