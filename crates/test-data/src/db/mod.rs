//! Store integration for seeding test data.
//!
//! The [`Seeder`] writes generated profiles into a document store, one
//! create-or-replace write per profile.

mod seeder;

pub use seeder::{SeedError, Seeder};
