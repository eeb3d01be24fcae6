//! Default seed script - populates Firestore with test musician profiles
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed -- [count]
//! ```
//!
//! The count defaults to 40. The service-account key is read from the path
//! in `FIREBASE_SERVICE_ACCOUNT`, falling back to
//! `firebase-service-account.json` in the working directory.

use anyhow::Context;
use profiles::FirestoreClient;
use profiles::firestore::ServiceAccountKey;
use test_data::config::SeedConfig;
use test_data::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = SeedConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        let count: i64 = arg
            .parse()
            .with_context(|| format!("invalid profile count: {arg}"))?;
        // Zero or negative counts seed nothing; that is not an error.
        config.profile_count = usize::try_from(count).unwrap_or(0);
    }

    let key_path = std::env::var("FIREBASE_SERVICE_ACCOUNT")
        .unwrap_or_else(|_| "firebase-service-account.json".to_string());
    let key = ServiceAccountKey::from_file(&key_path)
        .with_context(|| format!("failed to load service-account key from {key_path}"))?;

    let store = FirestoreClient::new(key);
    tracing::info!("Using Firestore project {}", store.project_id());

    let seeder = Seeder::new(store).with_collection(config.collection.clone());
    let mut rng = rand::thread_rng();
    let result = seeder.seed(config.profile_count, &mut rng).await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Profiles: {}", result.len());

    Ok(())
}
