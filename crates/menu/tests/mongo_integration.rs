//! Integration tests against a live MongoDB server.
//!
//! To run these tests, set MONGODB_URI to a disposable server:
//!
//! Run with: `MONGODB_URI=mongodb://localhost:27017/ cargo nextest run -p menu mongo`
//!
//! Each test writes to its own uniquely named database and drops nothing, so
//! point it at a scratch server.

use std::env;

use menu::{DocumentStore, InsertMode, MongoStore, StoreError};
use mongodb::bson::{doc, oid::ObjectId};

/// Connects to a fresh database, skipping tests if MONGODB_URI is not set.
async fn get_test_store() -> Option<MongoStore> {
    let uri = match env::var("MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("Skipping test: MONGODB_URI not set");
            return None;
        }
    };

    let database = format!("cremoso_test_{}", ObjectId::new().to_hex());
    match MongoStore::connect(&uri, &database).await {
        Ok(store) => Some(store),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to MongoDB: {e}");
            None
        }
    }
}

#[tokio::test]
async fn test_unordered_insert_reports_duplicates() {
    let Some(store) = get_test_store().await else {
        return;
    };

    store.ensure_unique_index("specialproducts", "name").await.unwrap();
    store
        .insert_one("specialproducts", doc! { "name": "Brownie", "basePrice": 5.0 })
        .await
        .unwrap();

    let batch = vec![
        doc! { "name": "Bolo", "basePrice": 10.0 },
        doc! { "name": "Brownie", "basePrice": 5.0 },
        doc! { "name": "Diversos", "basePrice": 0.0 },
    ];
    let err = store
        .insert_many("specialproducts", batch, InsertMode::Unordered)
        .await
        .unwrap_err();

    match err {
        StoreError::BulkWrite(failure) => {
            assert_eq!(failure.attempted, 3);
            assert_eq!(failure.inserted, 2);
            assert_eq!(failure.errors.len(), 1);
            assert_eq!(failure.errors[0].index, 1);
            assert!(failure.errors[0].is_duplicate_key());
        }
        other => panic!("expected bulk write failure, got {other}"),
    }

    store.close().await;
}

#[tokio::test]
async fn test_insert_one_returns_object_id() {
    let Some(store) = get_test_store().await else {
        return;
    };

    let id = store
        .insert_one("menuitems", doc! { "category": "Teste", "price": 1, "items": [] })
        .await
        .unwrap();
    assert!(id.as_object_id().is_some());

    store.close().await;
}
