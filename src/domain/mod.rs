//! Domain Layer
//!
//! The store contract without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Step descriptions (StepSpec)
//! - `value_objects/` - Immutable value types (StepOutputHandle, ContentDigest)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - Storage and encoding go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
