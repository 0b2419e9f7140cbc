//! In-Memory Store Implementation
//!
//! Implements the IntermediatesManager port with a process-local map.
//! Values live as long as the manager instance.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::{debug, trace};

use crate::domain::ports::IntermediatesManager;
use crate::domain::value_objects::StepOutputHandle;
use crate::error::{StoreError, StoreResult};

/// Process-local intermediate store
///
/// `get_value` hands out clones. Store `Arc<T>` values to share one
/// allocation between producer and consumers.
#[derive(Debug)]
pub struct InMemoryIntermediatesManager<V> {
    values: RwLock<HashMap<StepOutputHandle, V>>,
}

impl<V> InMemoryIntermediatesManager<V> {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored outputs
    pub fn len(&self) -> usize {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored handle, sorted
    pub fn handles(&self) -> Vec<StepOutputHandle> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        let mut handles: Vec<StepOutputHandle> = values.keys().cloned().collect();
        handles.sort();
        handles
    }
}

impl<V> Default for InMemoryIntermediatesManager<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntermediatesManager<V> for InMemoryIntermediatesManager<V>
where
    V: Clone + Send + Sync,
{
    fn has_value(&self, handle: &StepOutputHandle) -> StoreResult<bool> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.contains_key(handle))
    }

    fn get_value(&self, handle: &StepOutputHandle) -> StoreResult<V> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        trace!(%handle, "reading in-memory intermediate");
        values
            .get(handle)
            .cloned()
            .ok_or_else(|| StoreError::not_set(handle))
    }

    fn set_value(&self, handle: &StepOutputHandle, value: V) -> StoreResult<()> {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        match values.entry(handle.clone()) {
            Entry::Occupied(_) => Err(StoreError::already_set(handle)),
            Entry::Vacant(slot) => {
                slot.insert(value);
                debug!(%handle, "stored in-memory intermediate");
                Ok(())
            }
        }
    }
}
