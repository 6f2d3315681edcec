//! In-process [`DocumentStore`] with MongoDB insert semantics.
//!
//! Assigns `ObjectId`s, enforces declared unique indexes with the server's
//! duplicate-key code, and honors ordered/unordered bulk inserts. Clones share
//! state, so a test can keep one handle to inspect what another one wrote.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::database::{DocumentStore, InsertManyOutcome, InsertMode};
use crate::errors::{BulkWriteFailure, DUPLICATE_KEY_CODE, StoreError, WriteFailure};

#[derive(Debug, Default)]
struct State {
    reachable: bool,
    closed: bool,
    close_calls: usize,
    collections: HashMap<String, Vec<Document>>,
    unique_fields: HashMap<String, HashSet<String>>,
}

#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                reachable: true,
                ..State::default()
            })),
        }
    }

    /// A store whose every operation fails as if the server were down.
    pub fn unreachable() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    /// Documents stored in `collection`, in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.lock().collections.get(collection).map_or(0, Vec::len)
    }

    pub fn close_calls(&self) -> usize {
        self.lock().close_calls
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test thread must not hide the state from later assertions.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl State {
    fn check_available(&self) -> Result<(), StoreError> {
        if !self.reachable {
            return Err(StoreError::Unavailable(
                "server selection failed: connection refused".to_string(),
            ));
        }
        if self.closed {
            return Err(StoreError::Unavailable("client has been shut down".to_string()));
        }
        Ok(())
    }

    /// Stores one document, returning its `_id` or the duplicate-key message.
    fn insert(&mut self, collection: &str, mut document: Document) -> Result<Bson, String> {
        let id = match document.get("_id") {
            Some(id) => id.clone(),
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                document.insert("_id", id.clone());
                id
            }
        };

        let stored = self.collections.entry(collection.to_string()).or_default();
        let mut fields = vec!["_id".to_string()];
        if let Some(unique) = self.unique_fields.get(collection) {
            fields.extend(unique.iter().cloned());
        }

        for field in &fields {
            let Some(value) = document.get(field) else {
                continue;
            };
            if stored.iter().any(|existing| existing.get(field) == Some(value)) {
                return Err(format!(
                    "E11000 duplicate key error collection: {collection} index: {field}_1 dup key: {{ {field}: {value} }}"
                ));
            }
        }

        stored.push(document);
        Ok(id)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError> {
        let mut state = self.lock();
        state.check_available()?;

        state.insert(collection, document).map_err(|message| {
            StoreError::BulkWrite(BulkWriteFailure {
                attempted: 1,
                inserted: 0,
                errors: vec![WriteFailure {
                    index: 0,
                    code: DUPLICATE_KEY_CODE,
                    message,
                }],
            })
        })
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
        mode: InsertMode,
    ) -> Result<InsertManyOutcome, StoreError> {
        let mut state = self.lock();
        state.check_available()?;

        let attempted = documents.len();
        let mut inserted_ids = Vec::with_capacity(attempted);
        let mut errors = Vec::new();

        for (index, document) in documents.into_iter().enumerate() {
            match state.insert(collection, document) {
                Ok(id) => inserted_ids.push(id),
                Err(message) => {
                    errors.push(WriteFailure {
                        index,
                        code: DUPLICATE_KEY_CODE,
                        message,
                    });
                    if mode.is_ordered() {
                        break;
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(InsertManyOutcome { inserted_ids })
        } else {
            Err(StoreError::BulkWrite(BulkWriteFailure {
                attempted,
                inserted: inserted_ids.len(),
                errors,
            }))
        }
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.check_available()?;

        state
            .unique_fields
            .entry(collection.to_string())
            .or_default()
            .insert(field.to_string());
        Ok(())
    }

    async fn close(self) {
        let mut state = self.lock();
        state.closed = true;
        state.close_calls += 1;
    }
}
