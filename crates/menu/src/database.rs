//! Document store access.
//!
//! [`DocumentStore`] is the narrow surface the seeders need from a store:
//! single and bulk inserts, a uniqueness constraint, and an explicit close.
//! [`MongoStore`] is the MongoDB implementation; [`crate::memory::MemoryStore`]
//! implements the same contract in memory.

use async_trait::async_trait;
use mongodb::{
    Client, Database, IndexModel,
    bson::{Bson, Document, doc},
    error::{ErrorKind, InsertManyError},
    options::IndexOptions,
};
use tracing::{debug, info};

use crate::errors::{BulkWriteFailure, StoreError, WriteFailure};

/// How a bulk insert reacts to a rejected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    /// Stop at the first rejected document.
    Ordered,
    /// Attempt every document and report all rejections together.
    #[default]
    Unordered,
}

impl InsertMode {
    pub fn is_ordered(self) -> bool {
        matches!(self, InsertMode::Ordered)
    }

    /// Number of documents stored when `errors` were reported for a batch of `attempted`.
    fn inserted_count(self, attempted: usize, errors: &[WriteFailure]) -> usize {
        match self {
            InsertMode::Ordered => errors.iter().map(|e| e.index).min().unwrap_or(attempted),
            InsertMode::Unordered => attempted.saturating_sub(errors.len()),
        }
    }
}

/// Identifiers assigned to a fully successful bulk insert, in batch order.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertManyOutcome {
    pub inserted_ids: Vec<Bson>,
}

impl InsertManyOutcome {
    pub fn inserted(&self) -> usize {
        self.inserted_ids.len()
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document and returns the identifier the store assigned.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError>;

    /// Inserts a batch of documents.
    ///
    /// Rejected documents surface as [`StoreError::BulkWrite`]; with
    /// [`InsertMode::Unordered`] the remaining documents are still stored.
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
        mode: InsertMode,
    ) -> Result<InsertManyOutcome, StoreError>;

    /// Declares that `field` must be unique within `collection`.
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> Result<(), StoreError>;

    /// Releases the underlying connection.
    async fn close(self)
    where
        Self: Sized;
}

/// Renders an inserted identifier the way the console reports it.
pub fn format_inserted_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// MongoDB-backed store bound to one database.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Connects to `uri` and verifies the server answers a `ping`.
    ///
    /// The driver connects lazily, so without the ping an unreachable server
    /// would only be noticed by the first write.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(database);

        database.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB database {}", database.name());

        Ok(Self { client, database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        Ok(result.inserted_id)
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
        mode: InsertMode,
    ) -> Result<InsertManyOutcome, StoreError> {
        let attempted = documents.len();
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_many(documents)
            .ordered(mode.is_ordered())
            .await
            .map_err(|e| map_insert_many_error(e, attempted, mode))?;

        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);

        Ok(InsertManyOutcome {
            inserted_ids: ids.into_iter().map(|(_, id)| id).collect(),
        })
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> Result<(), StoreError> {
        let mut keys = Document::new();
        keys.insert(field, 1);
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let result = self
            .database
            .collection::<Document>(collection)
            .create_index(index)
            .await?;
        debug!("Unique index {} ready on {}", result.index_name, collection);

        Ok(())
    }

    async fn close(self) {
        let Self { client, database } = self;
        drop(database);
        client.shutdown().await;
        debug!("MongoDB client shut down");
    }
}

/// Splits per-document write errors out of a driver error.
///
/// Only errors that carry write errors become [`StoreError::BulkWrite`]; a bare
/// write concern failure or a network error stays a [`StoreError::Database`].
fn map_insert_many_error(
    err: mongodb::error::Error,
    attempted: usize,
    mode: InsertMode,
) -> StoreError {
    let errors = match err.kind.as_ref() {
        ErrorKind::InsertMany(InsertManyError {
            write_errors: Some(write_errors),
            ..
        }) => write_errors
            .iter()
            .map(|e| WriteFailure {
                index: e.index,
                code: e.code,
                message: e.message.clone(),
            })
            .collect::<Vec<_>>(),
        _ => return StoreError::Database(err),
    };

    StoreError::BulkWrite(BulkWriteFailure {
        attempted,
        inserted: mode.inserted_count(attempted, &errors),
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn failure(index: usize) -> WriteFailure {
        WriteFailure {
            index,
            code: 11000,
            message: "dup".to_string(),
        }
    }

    #[test]
    fn test_unordered_inserted_count() {
        let errors = vec![failure(0), failure(2)];
        assert_eq!(InsertMode::Unordered.inserted_count(4, &errors), 2);
    }

    #[test]
    fn test_ordered_inserted_count_stops_at_first_error() {
        let errors = vec![failure(2)];
        assert_eq!(InsertMode::Ordered.inserted_count(4, &errors), 2);
        assert_eq!(InsertMode::Ordered.inserted_count(4, &[]), 4);
    }

    #[test]
    fn test_default_mode_is_unordered() {
        assert_eq!(InsertMode::default(), InsertMode::Unordered);
        assert!(!InsertMode::default().is_ordered());
    }

    #[test]
    fn test_format_inserted_id() {
        let oid = ObjectId::new();
        assert_eq!(format_inserted_id(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(format_inserted_id(&Bson::String("abc".into())), "abc");
        assert_eq!(format_inserted_id(&Bson::Int32(7)), "7");
    }
}
