//! Error types for Handoff
//!
//! Uses `thiserror` for library errors. Every failure surfaces synchronously
//! to the caller of the operation that triggered it.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::CodecError;
use crate::domain::value_objects::StepOutputHandle;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Which half of the write-once contract a caller broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// `set_value` on a handle that already holds a value
    AlreadySet,
    /// `get_value` on a handle that holds no value
    NotSet,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::AlreadySet => write!(f, "a value is already stored"),
            Violation::NotSet => write!(f, "no value is stored"),
        }
    }
}

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Caller broke the write-once or read-after-write contract
    #[error("precondition violated for '{handle}': {violation}")]
    PreconditionViolation {
        handle: StepOutputHandle,
        violation: Violation,
    },

    /// Filesystem root is missing or not a directory
    #[error("invalid store root {path}: {reason}")]
    InvalidRoot { path: PathBuf, reason: String },

    /// On-disk state does not match the store layout
    #[error("corrupt store at {path}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    /// Underlying I/O failure, source preserved unchanged
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Step key or output name is not a usable identifier
    #[error("invalid {field} '{value}': {reason}")]
    InvalidHandle {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Output name is not declared by the step it was derived from
    #[error("step '{step_key}' does not declare an output named '{output_name}'")]
    UndeclaredOutput {
        step_key: String,
        output_name: String,
    },

    /// Payload could not be encoded or decoded
    #[error("codec failure for '{handle}': {source}")]
    Codec {
        handle: StepOutputHandle,
        #[source]
        source: CodecError,
    },

    /// Store configuration is unusable
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn already_set(handle: &StepOutputHandle) -> Self {
        StoreError::PreconditionViolation {
            handle: handle.clone(),
            violation: Violation::AlreadySet,
        }
    }

    pub(crate) fn not_set(handle: &StepOutputHandle) -> Self {
        StoreError::PreconditionViolation {
            handle: handle.clone(),
            violation: Violation::NotSet,
        }
    }

    /// True for caller bugs against the write-once contract
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, StoreError::PreconditionViolation { .. })
    }

    /// The violated precondition, if this is a contract error
    pub fn violation(&self) -> Option<Violation> {
        match self {
            StoreError::PreconditionViolation { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}
