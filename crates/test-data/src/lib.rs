//! Test data generation for bandly.
//!
//! This crate seeds a Firestore collection with synthetic musician profiles
//! to support manual verification and demos of the matching flows.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let store = FirestoreClient::new(key);
//! let seeder = Seeder::new(store);
//! let mut rng = rand::thread_rng();
//! let profiles = seeder.seed(40, &mut rng).await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

// Re-export core types from the profiles crate
pub use profiles::{DocumentStore, MemoryStore, Profile, ProfileStatus};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{ProfileGenConfig, ProfileGenerator};
    pub use crate::{DocumentStore, MemoryStore, Profile, ProfileStatus};
    pub use profiles::FirestoreClient;
}
