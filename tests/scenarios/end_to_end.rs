//! Single-output hand-off through a filesystem root.

use std::fs;

use handoff::{FileSystemIntermediatesManager, Violation};

use crate::common::*;

#[test]
fn scenario_write_read_and_reject_overwrite() {
    let run1 = tempfile::tempdir().unwrap();
    let store = FileSystemIntermediatesManager::new(run1.path()).unwrap();
    let h = handle("stepA", "result");

    store.set_value(&h, &42).unwrap();

    let file = run1.path().join("stepA").join("result");
    assert!(file.is_file());
    assert_eq!(store.get_value::<i32>(&h).unwrap(), 42);

    let err = store.set_value(&h, &99).unwrap_err();
    assert_eq!(err.violation(), Some(Violation::AlreadySet));

    let on_disk: i32 = serde_json::from_slice(&fs::read(&file).unwrap()).unwrap();
    assert_eq!(on_disk, 42);
}

#[test]
fn scenario_second_instance_sees_durable_values() {
    let root = tempfile::tempdir().unwrap();
    {
        let producer = FileSystemIntermediatesManager::new(root.path()).unwrap();
        producer.set_value(&handle("extract", "rows"), &sample(7)).unwrap();
    }

    let consumer = FileSystemIntermediatesManager::new(root.path()).unwrap();
    let h = handle("extract", "rows");
    assert!(consumer.has_value(&h).unwrap());
    assert_eq!(consumer.get_value::<Sample>(&h).unwrap(), sample(7));
    assert!(consumer.set_value(&h, &sample(8)).is_err());
}

#[test]
fn scenario_interrupted_write_is_invisible() {
    let root = tempfile::tempdir().unwrap();
    let step_dir = root.path().join("extract");
    fs::create_dir_all(&step_dir).unwrap();
    // What a crash between write and publish leaves behind.
    fs::write(step_dir.join(".handoff-Xy12ab"), b"{\"id\":").unwrap();

    let store = FileSystemIntermediatesManager::new(root.path()).unwrap();
    let h = handle("extract", "rows");
    assert!(!store.has_value(&h).unwrap());
    assert!(store.handles().unwrap().is_empty());
    assert_eq!(store.verify().unwrap().len(), 1);

    store.set_value(&h, &sample(1)).unwrap();
    assert_eq!(store.get_value::<Sample>(&h).unwrap(), sample(1));
}
