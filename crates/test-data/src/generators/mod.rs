//! Entity generators for test data.
//!
//! This module provides generators for creating schema-consistent test
//! entities:
//! - [`ProfileGenerator`]: Generate musician profiles with deterministic
//!   identities and randomized region, status, role and genre tags

pub mod profile;

pub use profile::{ProfileGenConfig, ProfileGenerator};
