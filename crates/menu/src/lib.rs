//! Catalog models and document store access for the Cremoso ice-cream shop.

pub mod database;
pub mod errors;
pub mod memory;
pub mod models;

pub use database::{DocumentStore, InsertManyOutcome, InsertMode, MongoStore, format_inserted_id};
pub use errors::{BulkWriteFailure, StoreError, WriteFailure};
pub use memory::MemoryStore;
pub use models::{Category, MenuItem, ProductSize, SpecialProduct};
