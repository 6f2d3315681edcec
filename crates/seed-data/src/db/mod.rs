//! Database integration for seeding the catalog.
//!
//! The [`Seeder`] inserts catalog literals through any
//! [`menu::DocumentStore`], reporting partial bulk failures instead of
//! aborting on them.

mod seeder;

pub use seeder::{BulkSeedOutcome, SeedError, Seeder};
