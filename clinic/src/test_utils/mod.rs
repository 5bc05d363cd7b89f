//! Test utilities
//!
//! In-memory port implementations and fixtures for unit testing.
//!
//! The owner repository is a hand-written mock: tests need it to assign
//! identifiers on save and to hold state across calls. The read-only ports
//! also get `mockall` mocks (`MockVetRepository`, `MockPetTypeRepository`)
//! for tests that only need to script a return value.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
