//! Domain Entities
//!
//! - `StepSpec` - A step key with its declared outputs

mod step;

pub use step::StepSpec;
