//! Store Layout
//!
//! Pure mapping between handles and paths under a store root:
//!
//! ```text
//! <root>/<step_key>/<output_name>
//! ```
//!
//! Names starting with [`TEMP_PREFIX`] are in-flight writes and never map to
//! a handle.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::StepOutputHandle;

/// Prefix of temporary files inside a step directory
pub const TEMP_PREFIX: &str = ".handoff-";

/// Directory holding every output of one step
pub fn step_dir(root: &Path, step_key: &str) -> PathBuf {
    root.join(step_key)
}

/// File holding the value of one output
pub fn output_path(root: &Path, handle: &StepOutputHandle) -> PathBuf {
    step_dir(root, handle.step_key()).join(handle.output_name())
}

/// Rebuild a handle from the two path segments below the root
pub fn handle_from_segments(step: &OsStr, output: &OsStr) -> Option<StepOutputHandle> {
    StepOutputHandle::new(step.to_str()?, output.to_str()?).ok()
}

/// Rebuild a handle from a path relative to the root
pub fn handle_from_relative(relative: &Path) -> Option<StepOutputHandle> {
    let mut components = relative.iter();
    let step = components.next()?;
    let output = components.next()?;
    if components.next().is_some() {
        return None;
    }
    handle_from_segments(step, output)
}

/// Whether a directory entry is an in-flight write
pub fn is_temp_name(name: &OsStr) -> bool {
    name.to_str()
        .map(|n| n.starts_with(TEMP_PREFIX))
        .unwrap_or(false)
}
