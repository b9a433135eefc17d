//! Test utilities
//!
//! Manual mock implementations of the ports and test fixtures for unit testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
