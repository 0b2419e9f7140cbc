//! Common test utilities for Handoff contract, scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment (store root, working dir, home) for CLI runs
//! - `StoreUnderTest`: A boxed backend plus whatever keeps it alive
//! - Fixtures: Reusable handles and payloads

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
