//! Catalog documents as they are stored in the `cremoso` database.

use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// A flavor category with its ordered list of flavors.
///
/// Stored as `{category, price, items: [{name, description}]}`. The store assigns
/// `_id` on insert; the category itself never carries one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub price: f64,
    pub items: Vec<MenuItem>,
}

/// A single flavor within a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A dessert sold outside the flavor menu (cakes, brownies, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialProduct {
    pub name: String,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    /// Optional size ladder; omitted from the document when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<ProductSize>,
}

impl SpecialProduct {
    pub fn new(name: impl Into<String>, base_price: f64) -> Self {
        Self {
            name: name.into(),
            base_price,
            sizes: Vec::new(),
        }
    }

    pub fn with_size(mut self, name: impl Into<String>, price: f64) -> Self {
        self.sizes.push(ProductSize {
            name: name.into(),
            price,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSize {
    pub name: String,
    pub price: f64,
}

/// Converts any serializable catalog value into a BSON document.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    Ok(bson::to_document(value)?)
}
