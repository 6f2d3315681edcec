//! The two seeding jobs run by the binaries.
//!
//! Each job owns its store handle and closes it before returning, whether the
//! insert succeeded or not. The returned report renders the single status line
//! the binaries print.

use std::fmt;

use menu::{BulkWriteFailure, DocumentStore, format_inserted_id};
use mongodb::bson::Bson;

use crate::catalog::{sabores_especiais_plus, special_products};
use crate::db::{BulkSeedOutcome, SeedError, Seeder};

/// Result of inserting the premium flavor category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeedReport {
    pub category: String,
    pub inserted_id: Bson,
}

impl fmt::Display for CategorySeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Categoria {} inserida com sucesso. ID: {}",
            self.category,
            format_inserted_id(&self.inserted_id)
        )
    }
}

/// Result of the special products batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSeedReport {
    pub outcome: BulkSeedOutcome,
}

impl ProductSeedReport {
    pub fn failure(&self) -> Option<&BulkWriteFailure> {
        match &self.outcome {
            BulkSeedOutcome::PartiallyFailed(failure) => Some(failure),
            BulkSeedOutcome::Inserted { .. } => None,
        }
    }
}

impl fmt::Display for ProductSeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            BulkSeedOutcome::Inserted { .. } => write!(f, "Produtos inseridos com sucesso!"),
            BulkSeedOutcome::PartiallyFailed(failure) => {
                write!(f, "Erro ao inserir produtos: {failure}")
            }
        }
    }
}

/// Inserts the "Sabores Especiais +" category.
///
/// Store errors propagate after the store is closed; nothing is retried.
pub async fn seed_menu_category<S: DocumentStore>(
    store: S,
) -> Result<CategorySeedReport, SeedError> {
    let seeder = Seeder::new(store);
    let category = sabores_especiais_plus();

    let result = seeder.seed_category(&category).await;
    seeder.close().await;

    Ok(CategorySeedReport {
        category: category.category,
        inserted_id: result?,
    })
}

/// Inserts the special products as one unordered batch.
///
/// Rejected documents are part of a successful report; only other store
/// errors come back as `Err`. The store is closed exactly once either way.
pub async fn seed_special_products<S: DocumentStore>(
    store: S,
) -> Result<ProductSeedReport, SeedError> {
    let seeder = Seeder::new(store);

    let result = seeder.seed_products(&special_products()).await;
    seeder.close().await;

    Ok(ProductSeedReport { outcome: result? })
}
