use std::sync::Arc;

use proptest::prelude::*;

use switchlog::{Record, Registry, SharedHandler};

fn handlers(count: usize) -> Vec<SharedHandler> {
    (0..count).map(|_| Arc::new(|_rec: &Record| {}) as SharedHandler).collect()
}

fn index(handlers: &[SharedHandler], handler: &Option<SharedHandler>) -> Option<usize> {
    handler.as_ref().map(|handler| {
        handlers.iter()
            .position(|h| Arc::ptr_eq(h, handler))
            .expect("foreign handler")
    })
}

proptest! {
    /// Any sequence of installs and removals behaves like a plain variable: each call returns the
    /// value written by the previous one and the last write wins.
    #[test]
    fn set_handler_behaves_like_a_slot(ops in prop::collection::vec(prop::option::of(0..4usize), 0..32)) {
        let handlers = handlers(4);
        let registry = Registry::new();
        let mut model = None;

        for op in ops {
            let previous = registry.set_handler(op.map(|idx| handlers[idx].clone()));

            prop_assert_eq!(model, index(&handlers, &previous));
            model = op;
        }

        prop_assert_eq!(model, index(&handlers, &registry.current_handler()));
    }

    #[test]
    fn override_always_restores(outer in prop::option::of(0..4usize), inner in prop::collection::vec(prop::option::of(0..4usize), 0..8)) {
        let handlers = handlers(4);
        let registry = Registry::new();
        registry.set_handler(outer.map(|idx| handlers[idx].clone()));

        {
            let _guard = registry.replace(None);
            for op in inner {
                registry.set_handler(op.map(|idx| handlers[idx].clone()));
            }
        }

        prop_assert_eq!(outer, index(&handlers, &registry.current_handler()));
    }
}
