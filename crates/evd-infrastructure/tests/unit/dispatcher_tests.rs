//! In-process dispatcher tests

use crate::test_utils::{RecordingHandler, call_log, calls, event_address};
use evd_domain::Error;
use evd_domain::events::{
    CustomerCreatedData, CustomerCreatedEvent, DomainEvent, EventDispatcher, EventHandler,
    FailurePolicy, NamedEvent, ProductCreatedData, ProductCreatedEvent, SharedEventHandler,
    same_handler,
};
use evd_infrastructure::InProcessEventDispatcher;
use evd_infrastructure::config::DispatcherConfig;
use std::sync::{Arc, Weak};

const PRODUCT: &str = ProductCreatedEvent::NAME;
const CUSTOMER: &str = CustomerCreatedEvent::NAME;

fn product_created() -> ProductCreatedEvent {
    ProductCreatedEvent::new(ProductCreatedData {
        name: "Product 1".to_string(),
        description: "Product 1 description".to_string(),
        price: 10.0,
    })
}

fn customer_created() -> CustomerCreatedEvent {
    CustomerCreatedEvent::new(CustomerCreatedData::default())
}

struct Noop;

impl EventHandler for Noop {
    fn handle(&self, _event: &dyn DomainEvent) -> evd_domain::Result<()> {
        Ok(())
    }
}

fn noop() -> SharedEventHandler {
    Arc::new(Noop)
}

#[test]
fn test_register_event_handler() {
    let dispatcher = InProcessEventDispatcher::new();
    let handler = noop();

    dispatcher.register(PRODUCT, Arc::clone(&handler));

    let handlers = dispatcher.handlers_for(PRODUCT).unwrap();
    assert_eq!(handlers.len(), 1);
    assert!(same_handler(&handlers[0], &handler));
}

#[test]
fn test_register_keeps_registration_order() {
    let dispatcher = InProcessEventDispatcher::new();
    let registered: Vec<SharedEventHandler> = (0..3).map(|_| noop()).collect();

    for handler in &registered {
        dispatcher.register(CUSTOMER, Arc::clone(handler));
    }

    let handlers = dispatcher.handlers_for(CUSTOMER).unwrap();
    assert_eq!(handlers.len(), 3);
    for (got, expected) in handlers.iter().zip(&registered) {
        assert!(same_handler(got, expected));
    }
}

#[test]
fn test_register_same_handler_twice_runs_twice() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::new();
    let handler: SharedEventHandler = RecordingHandler::new("h", &log);

    dispatcher.register(PRODUCT, Arc::clone(&handler));
    dispatcher.register(PRODUCT, handler);
    dispatcher.notify(&product_created()).unwrap();

    assert_eq!(calls(&log), vec![
        "h:ProductCreatedEvent",
        "h:ProductCreatedEvent"
    ]);
}

#[test]
fn test_unregister_event_handler_keeps_key() {
    let dispatcher = InProcessEventDispatcher::new();
    let handler = noop();

    dispatcher.register(PRODUCT, Arc::clone(&handler));
    dispatcher.unregister(PRODUCT, &handler);

    let handlers = dispatcher.handlers_for(PRODUCT).expect("key is kept");
    assert!(handlers.is_empty());
    assert!(dispatcher.event_handlers().contains_key(PRODUCT));
}

#[test]
fn test_unregister_removes_a_single_reference() {
    let dispatcher = InProcessEventDispatcher::new();
    let handler = noop();
    let other = noop();

    dispatcher.register(PRODUCT, Arc::clone(&handler));
    dispatcher.register(PRODUCT, Arc::clone(&other));
    dispatcher.register(PRODUCT, Arc::clone(&handler));
    dispatcher.unregister(PRODUCT, &handler);

    let handlers = dispatcher.handlers_for(PRODUCT).unwrap();
    assert_eq!(handlers.len(), 2);
    assert!(same_handler(&handlers[0], &other));
    assert!(same_handler(&handlers[1], &handler));
}

#[test]
fn test_unregister_uses_identity() {
    let dispatcher = InProcessEventDispatcher::new();
    let registered = noop();
    let lookalike = noop();

    dispatcher.register(PRODUCT, Arc::clone(&registered));
    dispatcher.unregister(PRODUCT, &lookalike);

    let handlers = dispatcher.handlers_for(PRODUCT).unwrap();
    assert_eq!(handlers.len(), 1);
    assert!(same_handler(&handlers[0], &registered));
}

#[test]
fn test_unregister_unknown_event_is_noop() {
    let dispatcher = InProcessEventDispatcher::new();

    dispatcher.unregister(PRODUCT, &noop());

    assert!(dispatcher.handlers_for(PRODUCT).is_none());
    assert!(dispatcher.event_handlers().is_empty());
}

#[test]
fn test_unregister_handler_registered_elsewhere_is_noop() {
    let dispatcher = InProcessEventDispatcher::new();
    let handler = noop();

    dispatcher.register(CUSTOMER, Arc::clone(&handler));
    dispatcher.register(PRODUCT, noop());
    dispatcher.unregister(PRODUCT, &handler);

    assert_eq!(dispatcher.handlers_for(PRODUCT).unwrap().len(), 1);
    assert_eq!(dispatcher.handlers_for(CUSTOMER).unwrap().len(), 1);
}

#[test]
fn test_unregister_all_event_handlers() {
    let dispatcher = InProcessEventDispatcher::new();

    dispatcher.register(PRODUCT, noop());
    dispatcher.register(CUSTOMER, noop());
    dispatcher.unregister_all();

    assert!(dispatcher.handlers_for(PRODUCT).is_none());
    assert!(dispatcher.handlers_for(CUSTOMER).is_none());
    assert!(dispatcher.event_handlers().is_empty());
}

#[test]
fn test_notify_all_handlers_in_order_with_same_event() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::new();
    let first = RecordingHandler::new("first", &log);
    let second = RecordingHandler::new("second", &log);

    dispatcher.register(CUSTOMER, first.clone());
    dispatcher.register(CUSTOMER, second.clone());

    let event = customer_created();
    dispatcher.notify(&event).unwrap();

    assert_eq!(calls(&log), vec![
        "first:CustomerCreatedEvent",
        "second:CustomerCreatedEvent"
    ]);
    let address = Some(event_address(&event));
    assert_eq!(*first.last_event.lock().unwrap(), address);
    assert_eq!(*second.last_event.lock().unwrap(), address);
}

#[test]
fn test_notify_only_reaches_handlers_of_that_event() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::new();

    dispatcher.register(PRODUCT, RecordingHandler::new("product", &log));
    dispatcher.register(CUSTOMER, RecordingHandler::new("customer", &log));
    dispatcher.notify(&product_created()).unwrap();

    assert_eq!(calls(&log), vec!["product:ProductCreatedEvent"]);
}

#[test]
fn test_notify_without_handlers_is_noop() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::new();
    let handler: SharedEventHandler = RecordingHandler::new("h", &log);

    // never registered
    dispatcher.notify(&product_created()).unwrap();

    // registered then removed
    dispatcher.register(PRODUCT, Arc::clone(&handler));
    dispatcher.unregister(PRODUCT, &handler);
    dispatcher.notify(&product_created()).unwrap();

    assert!(calls(&log).is_empty());
}

#[test]
fn test_fail_fast_stops_at_first_failure() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::new();

    dispatcher.register(CUSTOMER, RecordingHandler::new("first", &log));
    dispatcher.register(CUSTOMER, RecordingHandler::failing("broken", &log));
    dispatcher.register(CUSTOMER, RecordingHandler::new("third", &log));

    let error = dispatcher.notify(&customer_created()).unwrap_err();

    assert_eq!(calls(&log), vec![
        "first:CustomerCreatedEvent",
        "broken:CustomerCreatedEvent"
    ]);
    match error {
        Error::Handler { handler, event, .. } => {
            assert_eq!(handler, "broken");
            assert_eq!(event, CUSTOMER);
        }
        other => panic!("Expected Handler error, got {other:?}"),
    }
}

#[test]
fn test_isolate_runs_every_handler_and_reports_all_failures() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::with_policy(FailurePolicy::Isolate);

    dispatcher.register(CUSTOMER, RecordingHandler::failing("first", &log));
    dispatcher.register(CUSTOMER, RecordingHandler::new("second", &log));
    dispatcher.register(CUSTOMER, RecordingHandler::failing("third", &log));

    let error = dispatcher.notify(&customer_created()).unwrap_err();

    assert_eq!(calls(&log).len(), 3);
    match error {
        Error::HandlersFailed { event, failures } => {
            assert_eq!(event, CUSTOMER);
            let names: Vec<&str> = failures.iter().map(|f| f.handler.as_str()).collect();
            assert_eq!(names, vec!["first", "third"]);
        }
        other => panic!("Expected HandlersFailed error, got {other:?}"),
    }
}

#[test]
fn test_isolate_without_failures_is_ok() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::from_config(&DispatcherConfig::isolate());

    dispatcher.register(PRODUCT, RecordingHandler::new("h", &log));

    assert_eq!(dispatcher.policy(), FailurePolicy::Isolate);
    dispatcher.notify(&product_created()).unwrap();
    assert_eq!(calls(&log).len(), 1);
}

#[test]
fn test_panicking_handler_propagates_and_dispatcher_survives() {
    struct Panics;

    impl EventHandler for Panics {
        fn handle(&self, _event: &dyn DomainEvent) -> evd_domain::Result<()> {
            panic!("handler blew up");
        }
    }

    let dispatcher = InProcessEventDispatcher::new();
    let handler: SharedEventHandler = Arc::new(Panics);
    dispatcher.register(PRODUCT, Arc::clone(&handler));

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        dispatcher.notify(&product_created())
    }));
    assert!(outcome.is_err());

    dispatcher.unregister(PRODUCT, &handler);
    assert!(dispatcher.handlers_for(PRODUCT).unwrap().is_empty());
}

#[test]
fn test_event_handlers_returns_a_copy() {
    let dispatcher = InProcessEventDispatcher::new();
    dispatcher.register(PRODUCT, noop());

    let mut snapshot = dispatcher.event_handlers();
    snapshot.get_mut(PRODUCT).unwrap().clear();
    snapshot.insert(CUSTOMER.to_string(), vec![noop()]);

    assert_eq!(dispatcher.handlers_for(PRODUCT).unwrap().len(), 1);
    assert!(dispatcher.handlers_for(CUSTOMER).is_none());
}

/// Registers `late` on the dispatcher the first time it runs
struct RegistersAnother {
    dispatcher: Weak<InProcessEventDispatcher>,
    late: SharedEventHandler,
}

impl EventHandler for RegistersAnother {
    fn handle(&self, event: &dyn DomainEvent) -> evd_domain::Result<()> {
        if let Some(dispatcher) = self.dispatcher.upgrade() {
            dispatcher.register(event.event_name(), Arc::clone(&self.late));
        }
        Ok(())
    }
}

#[test]
fn test_handler_can_register_during_notify() {
    let log = call_log();
    let dispatcher = InProcessEventDispatcher::new_shared();
    let late: SharedEventHandler = RecordingHandler::new("late", &log);

    dispatcher.register(
        PRODUCT,
        Arc::new(RegistersAnother {
            dispatcher: Arc::downgrade(&dispatcher),
            late,
        }),
    );

    dispatcher.notify(&product_created()).unwrap();
    assert!(calls(&log).is_empty());
    assert_eq!(dispatcher.handlers_for(PRODUCT).unwrap().len(), 2);

    dispatcher.notify(&product_created()).unwrap();
    assert_eq!(calls(&log), vec!["late:ProductCreatedEvent"]);
}

#[test]
fn test_concurrent_registration() {
    let dispatcher = InProcessEventDispatcher::new_shared();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let dispatcher = Arc::clone(&dispatcher);
            scope.spawn(move || {
                for _ in 0..25 {
                    dispatcher.register(PRODUCT, noop());
                }
            });
        }
    });

    assert_eq!(dispatcher.handlers_for(PRODUCT).unwrap().len(), 200);
}

#[test]
fn test_usable_as_shared_trait_object() {
    let log = call_log();
    let dispatcher: evd_domain::events::SharedEventDispatcher =
        Arc::new(InProcessEventDispatcher::new());

    dispatcher.register(PRODUCT, RecordingHandler::new("h", &log));
    dispatcher.notify(&product_created()).unwrap();

    assert_eq!(calls(&log).len(), 1);
}

#[test]
fn test_debug_lists_handler_counts() {
    let dispatcher = InProcessEventDispatcher::new();
    dispatcher.register(PRODUCT, noop());
    dispatcher.register(PRODUCT, noop());

    let debug = format!("{dispatcher:?}");
    assert!(debug.contains("FailFast"));
    assert!(debug.contains("(\"ProductCreatedEvent\", 2)"));
}
