//! Inserts the special dessert products as one unordered batch.
//!
//! Re-running against a seeded database reports the duplicate names and still
//! exits successfully.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed-products
//! ```

use menu::MongoStore;
use seed_data::{config::StoreConfig, jobs::seed_special_products, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StoreConfig::from_env();
    tracing::info!("Connecting to {} (database {})", config.uri, config.database);

    let store = MongoStore::connect(&config.uri, &config.database).await?;
    let report = seed_special_products(store).await?;

    println!("{report}");
    Ok(())
}
