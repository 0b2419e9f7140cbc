//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod digest;
mod handle;

pub use digest::ContentDigest;
pub use handle::{validate_segment, StepOutputHandle};
