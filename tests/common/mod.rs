//! Common test utilities for mulcheck CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory with CLI execution helpers
//! - Fixtures: Canonical operand and product constants

pub mod env;

pub use env::*;
pub use fixtures::*;
