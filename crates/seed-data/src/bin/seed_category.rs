//! Inserts the "Sabores Especiais +" flavor category.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed-category
//! ```

use menu::MongoStore;
use seed_data::{config::StoreConfig, jobs::seed_menu_category, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = StoreConfig::from_env();
    tracing::info!("Connecting to {} (database {})", config.uri, config.database);

    let store = MongoStore::connect(&config.uri, &config.database).await?;
    let report = seed_menu_category(store).await?;

    println!("{report}");
    Ok(())
}
