//! Bandly profile domain model and document-store access.
//!
//! This crate holds the pieces of Bandly that test tooling shares with the
//! application side: the [`models::Profile`] document schema, a small typed
//! [`document`] value model, the [`store::DocumentStore`] abstraction with an
//! in-memory implementation for tests, and the Cloud Firestore client that
//! backs it in production.

pub mod document;
pub mod errors;
pub mod firestore;
pub mod models;
pub mod store;

pub use document::{Fields, Value};
pub use errors::StoreError;
pub use firestore::FirestoreClient;
pub use models::{Profile, ProfileStatus};
pub use store::{DocumentStore, MemoryStore};
