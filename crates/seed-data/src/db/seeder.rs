//! Catalog seeding on top of a [`DocumentStore`].

use menu::{
    BulkWriteFailure, Category, DocumentStore, InsertMode, SpecialProduct, StoreError,
    models::to_document,
};
use mongodb::bson::{Bson, Document};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{MENU_ITEMS_COLLECTION, PRODUCT_KEY_FIELD, SPECIAL_PRODUCTS_COLLECTION};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Outcome of a bulk product insert that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkSeedOutcome {
    /// Every document was stored.
    Inserted { count: usize },
    /// Some documents were rejected; the rest were stored.
    PartiallyFailed(BulkWriteFailure),
}

impl BulkSeedOutcome {
    pub fn inserted(&self) -> usize {
        match self {
            BulkSeedOutcome::Inserted { count } => *count,
            BulkSeedOutcome::PartiallyFailed(failure) => failure.inserted,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, BulkSeedOutcome::Inserted { .. })
    }
}

/// Writes catalog literals into the store.
pub struct Seeder<S> {
    store: S,
}

impl<S: DocumentStore> Seeder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Inserts one flavor category and returns the identifier the store assigned.
    pub async fn seed_category(&self, category: &Category) -> Result<Bson, SeedError> {
        info!(
            "Seeding category {} with {} items...",
            category.category,
            category.items.len()
        );

        let document = to_document(category)?;
        let id = self
            .store
            .insert_one(MENU_ITEMS_COLLECTION, document)
            .await?;

        info!("Seeded category {}", category.category);
        Ok(id)
    }

    /// Inserts the products as one unordered batch.
    ///
    /// Rejected documents (duplicate names on a re-run, for instance) do not
    /// stop the rest of the batch; they come back as
    /// [`BulkSeedOutcome::PartiallyFailed`]. Any other store error is returned.
    pub async fn seed_products(
        &self,
        products: &[SpecialProduct],
    ) -> Result<BulkSeedOutcome, SeedError> {
        info!("Seeding {} special products...", products.len());

        self.store
            .ensure_unique_index(SPECIAL_PRODUCTS_COLLECTION, PRODUCT_KEY_FIELD)
            .await?;

        let documents = products
            .iter()
            .map(to_document)
            .collect::<Result<Vec<Document>, _>>()?;

        match self
            .store
            .insert_many(SPECIAL_PRODUCTS_COLLECTION, documents, InsertMode::Unordered)
            .await
        {
            Ok(outcome) => {
                info!("Seeded {} special products", outcome.inserted());
                Ok(BulkSeedOutcome::Inserted {
                    count: outcome.inserted(),
                })
            }
            Err(StoreError::BulkWrite(failure)) => {
                warn!(
                    "Seeded {}/{} special products, {} rejected",
                    failure.inserted,
                    failure.attempted,
                    failure.errors.len()
                );
                Ok(BulkSeedOutcome::PartiallyFailed(failure))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Consumes the seeder and closes its store.
    pub async fn close(self) {
        self.store.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sabores_especiais_plus, special_products};
    use menu::MemoryStore;

    #[tokio::test]
    async fn test_seed_products_declares_unique_name() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(store.clone());

        let first = seeder.seed_products(&special_products()).await.unwrap();
        let second = seeder.seed_products(&special_products()).await.unwrap();

        assert!(first.is_complete());
        assert_eq!(second.inserted(), 0);
        assert_eq!(store.count(SPECIAL_PRODUCTS_COLLECTION), 4);
    }

    #[tokio::test]
    async fn test_unavailable_store_is_not_a_partial_failure() {
        let seeder = Seeder::new(MemoryStore::unreachable());
        let err = seeder.seed_products(&special_products()).await.unwrap_err();

        assert!(matches!(err, SeedError::Store(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_seed_category_writes_menu_items() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(store.clone());

        let id = seeder.seed_category(&sabores_especiais_plus()).await.unwrap();

        let docs = store.documents(MENU_ITEMS_COLLECTION);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get("_id"), Some(&id));
    }
}
