//! Document store seeding utilities.

use rand::Rng;
use thiserror::Error;
use tracing::info;

use profiles::{DocumentStore, Profile, StoreError};

use crate::config::SeedConfig;
use crate::generators::ProfileGenerator;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Seeder for writing generated test profiles into a document store.
///
/// Writes are sequential in key order (`test_1`, `test_2`, ...) and the
/// first failed write aborts the run.
pub struct Seeder<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a new seeder targeting the default `profiles` collection.
    pub fn new(store: S) -> Self {
        Self {
            store,
            collection: SeedConfig::default().collection,
        }
    }

    /// Sets the target collection.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Generates `count` profiles and writes each under its uid.
    ///
    /// A `count` of zero writes nothing and is not an error. Returns the
    /// generated profiles.
    pub async fn seed(&self, count: usize, rng: &mut impl Rng) -> Result<Vec<Profile>, SeedError> {
        let profiles = ProfileGenerator::new().generate_batch(count, rng);
        self.seed_profiles(&profiles).await?;
        Ok(profiles)
    }

    /// Writes pre-generated profiles into the store.
    pub async fn seed_profiles(&self, profiles: &[Profile]) -> Result<(), SeedError> {
        info!("Seeding {} test profiles...", profiles.len());

        for profile in profiles {
            self.store
                .set(&self.collection, &profile.uid, &profile.to_fields())
                .await?;
            info!("  {} · {}", profile.uid, profile.display_name);
        }

        info!("Seeded {} profiles", profiles.len());
        Ok(())
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}
