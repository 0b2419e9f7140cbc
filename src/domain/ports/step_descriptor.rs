//! StepDescriptor port - what the orchestration layer tells the store
//! about a step.
//!
//! The store only needs a stable key and the declared output names, and only
//! to build handles (`StepOutputHandle::from_step`).

pub trait StepDescriptor {
    /// Stable, unique key of the step within a run
    fn key(&self) -> &str;

    /// Names of the outputs the step declares
    fn output_names(&self) -> Vec<&str>;
}
