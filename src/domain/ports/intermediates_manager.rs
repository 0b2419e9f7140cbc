//! IntermediatesManager port - the write-once value store contract
//!
//! Every backend keys values by [`StepOutputHandle`] and enforces the same
//! two preconditions:
//! - `set_value` only on a handle with no value (write-once)
//! - `get_value` only on a handle with a value (read-after-write)
//!
//! Breaking either is a caller bug reported as
//! [`StoreError::PreconditionViolation`](crate::error::StoreError), never a
//! silent overwrite or a default value.

use crate::domain::value_objects::StepOutputHandle;
use crate::error::StoreResult;

/// Intermediate value store for one execution context
///
/// Implementations:
/// - `InMemoryIntermediatesManager` - process-local map
/// - `FileSystemIntermediatesManager` - one file per output under a root
///
/// The trait is object-safe for a fixed `V`, so a backend can be chosen at
/// construction time and used as `Box<dyn IntermediatesManager<V>>`.
pub trait IntermediatesManager<V>: Send + Sync {
    /// Whether a value is stored for `handle`
    fn has_value(&self, handle: &StepOutputHandle) -> StoreResult<bool>;

    /// The value stored for `handle`; requires `has_value(handle)`
    fn get_value(&self, handle: &StepOutputHandle) -> StoreResult<V>;

    /// Store `value` for `handle`; requires `!has_value(handle)`
    fn set_value(&self, handle: &StepOutputHandle, value: V) -> StoreResult<()>;
}

impl<V, M> IntermediatesManager<V> for Box<M>
where
    M: IntermediatesManager<V> + ?Sized,
{
    fn has_value(&self, handle: &StepOutputHandle) -> StoreResult<bool> {
        (**self).has_value(handle)
    }

    fn get_value(&self, handle: &StepOutputHandle) -> StoreResult<V> {
        (**self).get_value(handle)
    }

    fn set_value(&self, handle: &StepOutputHandle, value: V) -> StoreResult<()> {
        (**self).set_value(handle, value)
    }
}
