//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod codec;
pub mod intermediates_manager;
pub mod step_descriptor;

pub use codec::{Codec, CodecError};
pub use intermediates_manager::IntermediatesManager;
pub use step_descriptor::StepDescriptor;
