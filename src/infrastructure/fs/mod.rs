//! File System Store
//!
//! The durable backend and the pieces it is built from.

mod atomic;
pub mod layout;
mod local;

pub use local::{FileSystemIntermediatesManager, LayoutIssue};
