//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Default number of profiles a seed run creates.
pub const DEFAULT_PROFILE_COUNT: usize = 40;

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of profiles to generate.
    pub profile_count: usize,

    /// Target collection for profile documents.
    pub collection: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            profile_count: DEFAULT_PROFILE_COUNT,
            collection: "profiles".to_string(),
        }
    }
}
