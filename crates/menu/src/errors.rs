use std::fmt;

use mongodb::bson;
use thiserror::Error;

/// Server error code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bson::ser::Error),

    #[error("Bulk write error: {0}")]
    BulkWrite(BulkWriteFailure),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns the per-document failures if this is a bulk write error.
    pub fn as_bulk_write(&self) -> Option<&BulkWriteFailure> {
        match self {
            StoreError::BulkWrite(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Aggregated result of a bulk insert in which some documents were rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkWriteFailure {
    /// Number of documents submitted in the batch.
    pub attempted: usize,
    /// Number of documents the store accepted.
    pub inserted: usize,
    pub errors: Vec<WriteFailure>,
}

impl BulkWriteFailure {
    pub fn is_duplicate_key_only(&self) -> bool {
        self.errors.iter().all(WriteFailure::is_duplicate_key)
    }
}

impl fmt::Display for BulkWriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} documents inserted",
            self.inserted, self.attempted
        )?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

/// A single rejected document within a bulk insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    /// Position of the document in the submitted batch.
    pub index: usize,
    pub code: i32,
    pub message: String,
}

impl WriteFailure {
    pub fn is_duplicate_key(&self) -> bool {
        self.code == DUPLICATE_KEY_CODE
    }
}

impl fmt::Display for WriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "document {} failed (code {}): {}",
            self.index, self.code, self.message
        )
    }
}
