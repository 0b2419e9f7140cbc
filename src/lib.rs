//! Handoff - write-once intermediate value store for staged pipelines
//!
//! Each step of a pipeline produces named outputs that later steps consume.
//! A store answers three questions about a `(step, output)` pair: is there a
//! value, what is it, and record a new one. Values are write-once: a second
//! write or a read before the first write is a caller bug.
//!
//! Two backends share the [`IntermediatesManager`] contract:
//! - [`InMemoryIntermediatesManager`] keeps values in the process
//! - [`FileSystemIntermediatesManager`] keeps one file per output under
//!   `<root>/<step_key>/<output_name>`

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Backend, Config, StoreConfig};
pub use domain::entities::StepSpec;
pub use domain::ports::{Codec, CodecError, IntermediatesManager, StepDescriptor};
pub use domain::value_objects::{ContentDigest, StepOutputHandle};
pub use error::{StoreError, StoreResult, Violation};
pub use infrastructure::{
    open_filesystem, open_store, Encoding, FileSystemIntermediatesManager,
    InMemoryIntermediatesManager, LayoutIssue,
};
