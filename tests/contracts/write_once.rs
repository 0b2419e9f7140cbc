//! Write-once contracts (STORE-001 through STORE-004)
//!
//! Every backend runs the same checks through `dyn IntermediatesManager`.

use crate::common::*;
use handoff::{IntermediatesManager, Violation};

type Store = dyn IntermediatesManager<Sample>;

/// CONTRACT STORE-001: A handle never written has no value, and reading it
/// is a precondition violation rather than a default.
fn unwritten_handle_is_absent(store: &Store) {
    let h = handle("stepA", "result");
    assert!(!store.has_value(&h).unwrap());

    let err = store.get_value(&h).unwrap_err();
    assert_eq!(err.violation(), Some(Violation::NotSet), "{}", err);
}

/// CONTRACT STORE-002: A successful write is visible to has/get.
fn write_then_read(store: &Store) {
    let h = handle("stepA", "result");
    store.set_value(&h, sample(42)).unwrap();

    assert!(store.has_value(&h).unwrap());
    assert_eq!(store.get_value(&h).unwrap(), sample(42));
    // Reads do not consume the value.
    assert_eq!(store.get_value(&h).unwrap(), sample(42));
}

/// CONTRACT STORE-003: A second write fails and keeps the first value.
fn second_write_is_rejected(store: &Store) {
    let h = handle("stepA", "result");
    store.set_value(&h, sample(42)).unwrap();

    let err = store.set_value(&h, sample(99)).unwrap_err();
    assert_eq!(err.violation(), Some(Violation::AlreadySet), "{}", err);
    assert_eq!(store.get_value(&h).unwrap(), sample(42));
}

/// CONTRACT STORE-004: Distinct handles are independent, in either order.
fn handles_are_independent(store: &Store) {
    let a = handle("stepA", "result");
    let b = handle("stepB", "result");
    let c = handle("stepA", "summary");

    store.set_value(&b, sample(2)).unwrap();
    assert!(!store.has_value(&a).unwrap());
    store.set_value(&a, sample(1)).unwrap();
    store.set_value(&c, sample(3)).unwrap();

    assert_eq!(store.get_value(&a).unwrap(), sample(1));
    assert_eq!(store.get_value(&b).unwrap(), sample(2));
    assert_eq!(store.get_value(&c).unwrap(), sample(3));
}

/// A failed duplicate write leaves other handles alone.
fn failed_write_does_not_disturb_others(store: &Store) {
    let a = handle("stepA", "result");
    let b = handle("stepB", "result");
    store.set_value(&a, sample(1)).unwrap();
    store.set_value(&b, sample(2)).unwrap();

    assert!(store.set_value(&a, sample(10)).is_err());

    assert_eq!(store.get_value(&b).unwrap(), sample(2));
}

macro_rules! backend_contracts {
    ($($backend:ident => $make:path),* $(,)?) => {
        $(
            mod $backend {
                use super::*;

                #[test]
                fn contract_unwritten_handle_is_absent() {
                    let sut = $make();
                    unwritten_handle_is_absent(&*sut.store);
                }

                #[test]
                fn contract_write_then_read() {
                    let sut = $make();
                    write_then_read(&*sut.store);
                }

                #[test]
                fn contract_second_write_is_rejected() {
                    let sut = $make();
                    second_write_is_rejected(&*sut.store);
                }

                #[test]
                fn contract_handles_are_independent() {
                    let sut = $make();
                    handles_are_independent(&*sut.store);
                }

                #[test]
                fn contract_failed_write_does_not_disturb_others() {
                    let sut = $make();
                    failed_write_does_not_disturb_others(&*sut.store);
                }
            }
        )*
    };
}

backend_contracts! {
    memory => memory_store,
    filesystem => filesystem_store,
}
