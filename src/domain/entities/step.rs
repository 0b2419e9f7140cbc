//! Step Entity
//!
//! A minimal step description: key plus declared outputs. Orchestrators with
//! their own step types implement `StepDescriptor` directly instead.

use crate::domain::ports::StepDescriptor;
use crate::domain::value_objects::StepOutputHandle;
use crate::error::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    key: String,
    outputs: Vec<String>,
}

impl StepSpec {
    pub fn new<I, S>(key: impl Into<String>, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: key.into(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Handles for every declared output, in declaration order
    pub fn output_handles(&self) -> StoreResult<Vec<StepOutputHandle>> {
        self.outputs
            .iter()
            .map(|name| StepOutputHandle::from_step(self, name))
            .collect()
    }
}

impl StepDescriptor for StepSpec {
    fn key(&self) -> &str {
        &self.key
    }

    fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(String::as_str).collect()
    }
}
