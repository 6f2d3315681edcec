//! Catalog seeders for the Cremoso ice-cream shop.
//!
//! Two jobs write fixed catalog content into MongoDB:
//!
//! - [`jobs::seed_menu_category`] inserts the "Sabores Especiais +" flavor
//!   category as a single document.
//! - [`jobs::seed_special_products`] inserts the dessert products as one
//!   unordered batch, reporting rejected documents instead of failing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = StoreConfig::from_env();
//! let store = MongoStore::connect(&config.uri, &config.database).await?;
//! let report = seed_special_products(store).await?;
//! println!("{report}");
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod jobs;
pub mod logging;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{sabores_especiais_plus, special_products};
    pub use crate::config::StoreConfig;
    pub use crate::db::{BulkSeedOutcome, SeedError, Seeder};
    pub use crate::jobs::{
        CategorySeedReport, ProductSeedReport, seed_menu_category, seed_special_products,
    };
    pub use menu::{DocumentStore, MemoryStore, MongoStore};
}
