use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product};
use super::value_objects::ProductId;

/// Storage key holding the JSON array of product records.
pub const PRODUCTS_KEY: &str = "inventory.products";
/// Storage key holding the decimal next-id counter.
pub const NEXT_ID_KEY: &str = "inventory.next_id";

/// Persisted shape of a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity: product.quantity,
        }
    }
}

impl ProductRecord {
    /// Converts back into a domain product, re-checking every field rule.
    /// `u64::MAX` is refused: no counter value could stay ahead of it.
    pub fn into_domain(self) -> Result<Product, SnapshotError> {
        let id = self.id;
        if id == 0 || id == u64::MAX {
            return Err(SnapshotError::InvalidRecord(id));
        }

        Product::new(
            ProductId::new(id),
            NewProductProps::new(self.name, self.category, self.price, i64::from(self.quantity)),
        )
        .map_err(|_| SnapshotError::InvalidRecord(id))
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot.malformed")]
    Malformed(String),
    #[error("snapshot.invalid_record")]
    InvalidRecord(u64),
    #[error("snapshot.duplicate_id")]
    DuplicateId(u64),
}

/// Repository state as written to and read from the key-value store.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    pub next_id: ProductId,
}

impl Default for InventorySnapshot {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_id: ProductId::FIRST,
        }
    }
}

/// Serializes products into the value stored under [`PRODUCTS_KEY`].
pub fn encode_products(products: &[Product]) -> Result<String, RepositoryError> {
    let records: Vec<ProductRecord> = products.iter().map(ProductRecord::from).collect();
    serde_json::to_string(&records).map_err(|_| RepositoryError::serialization())
}

/// Serializes the counter into the value stored under [`NEXT_ID_KEY`].
pub fn encode_next_id(next_id: ProductId) -> String {
    next_id.to_string()
}

impl InventorySnapshot {
    /// Rebuilds state from the two stored values.
    ///
    /// Returns `Ok(None)` when nothing was ever stored. A missing, unparseable
    /// or stale counter is repaired to one past the highest stored id; the
    /// product list itself must be well formed.
    pub fn decode(
        products: Option<&str>,
        next_id: Option<&str>,
    ) -> Result<Option<Self>, SnapshotError> {
        let Some(raw) = products else {
            return Ok(None);
        };

        let records: Vec<ProductRecord> =
            serde_json::from_str(raw).map_err(|e| SnapshotError::Malformed(e.to_string()))?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut restored = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                return Err(SnapshotError::DuplicateId(record.id));
            }
            restored.push(record.into_domain()?);
        }

        let floor = restored
            .iter()
            .filter_map(|p| p.id.next())
            .max()
            .unwrap_or(ProductId::FIRST);
        let stored = next_id.and_then(|raw| raw.parse::<ProductId>().ok());
        let next_id = match stored {
            Some(id) if id >= floor => id,
            _ => floor,
        };

        Ok(Some(Self {
            products: restored,
            next_id,
        }))
    }
}
