//! Step Output Handle Value Object
//!
//! The identity of one output slot: a step key plus one of the output names
//! that step declares. Handles own no value; they are lookup keys.
//!
//! Each field doubles as a single path segment in the filesystem layout, so
//! construction rejects anything that could not round-trip through a
//! directory tree:
//! - Empty strings
//! - Path separators (`/`, `\`) and NUL bytes
//! - `.` and `..`
//! - A leading `.` (reserved for in-flight temp files)

use std::fmt;

use crate::domain::ports::StepDescriptor;
use crate::error::{StoreError, StoreResult};

/// Identity of one step output
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepOutputHandle {
    step_key: String,
    output_name: String,
}

impl StepOutputHandle {
    /// Create a handle after validating both fields
    pub fn new(step_key: impl Into<String>, output_name: impl Into<String>) -> StoreResult<Self> {
        let step_key = step_key.into();
        let output_name = output_name.into();
        validate_segment("step key", &step_key)?;
        validate_segment("output name", &output_name)?;
        Ok(Self {
            step_key,
            output_name,
        })
    }

    /// Derive a handle from a step and one of its declared outputs
    pub fn from_step<S>(step: &S, output_name: &str) -> StoreResult<Self>
    where
        S: StepDescriptor + ?Sized,
    {
        if !step.output_names().contains(&output_name) {
            return Err(StoreError::UndeclaredOutput {
                step_key: step.key().to_string(),
                output_name: output_name.to_string(),
            });
        }
        Self::new(step.key(), output_name)
    }

    pub fn step_key(&self) -> &str {
        &self.step_key
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }
}

impl fmt::Display for StepOutputHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.step_key, self.output_name)
    }
}

/// Check that `value` can stand as one path segment of the store layout
pub fn validate_segment(field: &'static str, value: &str) -> StoreResult<()> {
    let reason = if value.is_empty() {
        Some("must not be empty")
    } else if value == "." || value == ".." {
        Some("must not be a relative path component")
    } else if value.starts_with('.') {
        Some("must not start with '.'")
    } else if value.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if value.contains('\0') {
        Some("must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StoreError::InvalidHandle {
            field,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
