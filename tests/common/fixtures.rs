//! Reusable handles, payloads and backends.

use serde::{Deserialize, Serialize};
use tempfile::TempDir;

use handoff::{
    FileSystemIntermediatesManager, InMemoryIntermediatesManager, IntermediatesManager,
    StepOutputHandle,
};

/// Structured payload used across contract tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: u32,
    pub tags: Vec<String>,
}

pub fn sample(id: u32) -> Sample {
    Sample {
        id,
        tags: vec![format!("tag-{}", id), "shared".to_string()],
    }
}

pub fn handle(step: &str, output: &str) -> StepOutputHandle {
    StepOutputHandle::new(step, output).expect("valid test handle")
}

/// A backend behind the store trait, plus its temp root if it has one
pub struct StoreUnderTest {
    pub root: Option<TempDir>,
    pub store: Box<dyn IntermediatesManager<Sample>>,
}

pub fn memory_store() -> StoreUnderTest {
    StoreUnderTest {
        root: None,
        store: Box::new(InMemoryIntermediatesManager::new()),
    }
}

pub fn filesystem_store() -> StoreUnderTest {
    let root = tempfile::tempdir().expect("temp root");
    let store = FileSystemIntermediatesManager::new(root.path()).expect("open store");
    StoreUnderTest {
        root: Some(root),
        store: Box::new(store),
    }
}
