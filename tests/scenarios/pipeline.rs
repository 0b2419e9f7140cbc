//! A three-step pipeline handing outputs downstream through either backend.

use std::collections::BTreeMap;

use handoff::{
    open_store, Backend, Config, IntermediatesManager, StepOutputHandle, StepSpec,
    StoreResult,
};

type Value = BTreeMap<String, i64>;

/// extract -> transform -> load, each step reading only what upstream wrote
fn run_pipeline(store: &dyn IntermediatesManager<Value>) -> StoreResult<Value> {
    let extract = StepSpec::new("extract", ["rows"]);
    let transform = StepSpec::new("transform", ["totals", "count"]);
    let load = StepSpec::new("load", ["report"]);

    let rows = StepOutputHandle::from_step(&extract, "rows")?;
    store.set_value(
        &rows,
        Value::from([("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)]),
    )?;

    let input = store.get_value(&rows)?;
    let totals = StepOutputHandle::from_step(&transform, "totals")?;
    let count = StepOutputHandle::from_step(&transform, "count")?;
    store.set_value(
        &totals,
        Value::from([("sum".to_string(), input.values().sum::<i64>())]),
    )?;
    store.set_value(
        &count,
        Value::from([("n".to_string(), input.len() as i64)]),
    )?;

    let mut report = store.get_value(&totals)?;
    report.extend(store.get_value(&count)?);
    let out = StepOutputHandle::from_step(&load, "report")?;
    store.set_value(&out, report)?;
    store.get_value(&out)
}

fn expected_report() -> Value {
    Value::from([("n".to_string(), 3), ("sum".to_string(), 6)])
}

#[test]
fn scenario_pipeline_in_memory() {
    let store = open_store::<Value>(&Config::default()).unwrap();
    assert_eq!(run_pipeline(&*store).unwrap(), expected_report());
}

#[test]
fn scenario_pipeline_on_disk_and_rerun_is_rejected() {
    let root = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.store.backend = Backend::Filesystem;
    config.store.root = Some(root.path().to_path_buf());

    let store = open_store::<Value>(&config).unwrap();
    assert_eq!(run_pipeline(&*store).unwrap(), expected_report());

    for step in ["extract", "transform", "load"] {
        assert!(root.path().join(step).is_dir(), "missing {}", step);
    }

    // Re-running against the same root trips the write-once check.
    let again = open_store::<Value>(&config).unwrap();
    let err = run_pipeline(&*again).unwrap_err();
    assert!(err.is_precondition_violation(), "{}", err);
}

#[test]
fn scenario_undeclared_output_is_refused() {
    let step = StepSpec::new("extract", ["rows"]);
    let err = StepOutputHandle::from_step(&step, "sidecar").unwrap_err();
    assert!(err.to_string().contains("sidecar"));
}
