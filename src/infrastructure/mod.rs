//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `memory` - In-process store
//! - `fs/` - Filesystem store (layout, atomic publish, manager)
//! - `codec` - Serde encodings for the filesystem store
//! - `factory` - Backend selection from configuration

pub mod codec;
pub mod factory;
pub mod fs;
pub mod memory;

// Re-export for convenience
pub use codec::Encoding;
pub use factory::{open_filesystem, open_store};
pub use fs::{FileSystemIntermediatesManager, LayoutIssue};
pub use memory::InMemoryIntermediatesManager;
