//! Rendezvous registry contract tests.

use std::sync::Arc;
use std::thread;

use testscript::RunnableRegistry;
use testscript_core::{SharedRunnable, runnable_fn};

#[test]
fn getters_are_absent_before_any_set() {
    let registry = RunnableRegistry::new();

    assert!(registry.test_runnable().is_none());
    assert!(registry.exit_runnable().is_none());
}

#[test]
fn set_then_get_preserves_identity() {
    let registry = RunnableRegistry::new();
    let test: SharedRunnable = runnable_fn(|| {});
    let exit: SharedRunnable = runnable_fn(|| {});

    registry.set_runnables(Some(test.clone()), Some(exit.clone()));

    let got_test = registry.test_runnable().expect("test runnable was set");
    let got_exit = registry.exit_runnable().expect("exit runnable was set");
    assert!(
        Arc::ptr_eq(&test, &got_test),
        "reader must get the writer's allocation back, not a copy"
    );
    assert!(Arc::ptr_eq(&exit, &got_exit));
}

#[test]
fn either_slot_may_be_absent() {
    let registry = RunnableRegistry::new();
    let test: SharedRunnable = runnable_fn(|| {});

    registry.set_runnables(Some(test), None);

    assert!(registry.test_runnable().is_some());
    assert!(registry.exit_runnable().is_none());
}

#[test]
fn repeated_set_overwrites_prior_values() {
    let registry = RunnableRegistry::new();
    let first: SharedRunnable = runnable_fn(|| {});
    let second: SharedRunnable = runnable_fn(|| {});

    registry.set_runnables(Some(first.clone()), Some(first.clone()));
    registry.set_runnables(Some(second.clone()), None);

    let got = registry.test_runnable().expect("second value was set");
    assert!(Arc::ptr_eq(&second, &got), "second set must win");
    assert!(!Arc::ptr_eq(&first, &got));
    assert!(
        registry.exit_runnable().is_none(),
        "overwrite replaces both slots, including with absence"
    );
}

#[test]
fn clearing_both_slots_is_allowed() {
    let registry = RunnableRegistry::new();
    registry.set_runnables(Some(runnable_fn(|| {})), Some(runnable_fn(|| {})));

    registry.set_runnables(None, None);

    assert!(registry.test_runnable().is_none());
    assert!(registry.exit_runnable().is_none());
}

#[test]
fn readers_on_other_threads_see_the_registered_pair() {
    let registry = Arc::new(RunnableRegistry::new());
    let test: SharedRunnable = runnable_fn(|| {});
    registry.set_runnables(Some(test.clone()), Some(test.clone()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let test = test.clone();
            thread::spawn(move || {
                let got = registry.test_runnable().expect("set before spawn");
                assert!(Arc::ptr_eq(&test, &got));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread must not panic");
    }
}
