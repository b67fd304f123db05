use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStore;

use super::errors::ProductError;
use super::model::{NewProductProps, Product};
use super::ordering;
use super::snapshot::{self, InventorySnapshot, NEXT_ID_KEY, PRODUCTS_KEY};
use super::summary::InventorySummary;
use super::value_objects::{ProductId, SortKey};

/// In-memory product collection with write-through persistence.
///
/// Products are kept in creation order. Every mutation is written to the
/// store before it is acknowledged; if the write fails the collection is
/// left as it was and the error is returned.
pub struct ProductRepository {
    products: Vec<Product>,
    next_id: ProductId,
    store: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl ProductRepository {
    /// Empty repository; nothing is read from `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self::from_snapshot(InventorySnapshot::default(), store, logger)
    }

    /// Restores state from `store`, falling back to an empty repository when
    /// nothing is stored or the stored state cannot be read.
    pub fn restore(store: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        let products = store.get(PRODUCTS_KEY);
        let next_id = store.get(NEXT_ID_KEY);

        let snapshot = match InventorySnapshot::decode(products.as_deref(), next_id.as_deref()) {
            Ok(Some(snapshot)) => {
                logger.info(&format!(
                    "Restored {} products, next id {}",
                    snapshot.products.len(),
                    snapshot.next_id
                ));
                snapshot
            }
            Ok(None) => {
                logger.info("No stored inventory, starting empty");
                InventorySnapshot::default()
            }
            Err(e) => {
                logger.warn(&format!("Discarding unreadable inventory state: {:?}", e));
                InventorySnapshot::default()
            }
        };

        Self::from_snapshot(snapshot, store, logger)
    }

    fn from_snapshot(
        snapshot: InventorySnapshot,
        store: Arc<dyn KeyValueStore>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            products: snapshot.products,
            next_id: snapshot.next_id,
            store,
            logger,
        }
    }

    pub fn add(&mut self, props: NewProductProps) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Adding product: {}", props.name.trim()));

        let product = Product::new(self.next_id, props)?;
        // The counter must stay ahead of every issued id.
        let next_id = self.next_id.next().ok_or(ProductError::IdsExhausted)?;
        // The id is spent even if the write below fails.
        self.next_id = next_id;

        self.products.push(product.clone());
        if let Err(e) = self.persist() {
            self.products.pop();
            return Err(e.into());
        }

        self.logger
            .info(&format!("Product added with id: {}", product.id));
        Ok(product)
    }

    pub fn update(&mut self, id: ProductId, props: NewProductProps) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", id));

        let updated = Product::new(id, props)?;
        let index = self.position(id)?;

        let previous = std::mem::replace(&mut self.products[index], updated.clone());
        if let Err(e) = self.persist() {
            self.products[index] = previous;
            return Err(e.into());
        }

        self.logger.info(&format!("Product updated: {}", id));
        Ok(updated)
    }

    pub fn remove(&mut self, id: ProductId) -> Result<(), ProductError> {
        self.logger.info(&format!("Removing product: {}", id));

        let index = self.position(id)?;
        let removed = self.products.remove(index);
        if let Err(e) = self.persist() {
            self.products.insert(index, removed);
            return Err(e.into());
        }

        self.logger.info(&format!("Product removed: {}", id));
        Ok(())
    }

    pub fn get(&self, id: ProductId) -> Result<&Product, ProductError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(ProductError::NotFound)
    }

    /// All products in creation order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products whose name or category contains `term`, ignoring case and
    /// surrounding whitespace. A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }

        let found: Vec<&Product> = self.products.iter().filter(|p| p.matches(&needle)).collect();
        self.logger.debug(&format!(
            "Search '{}' matched {} of {} products",
            needle,
            found.len(),
            self.products.len()
        ));
        found
    }

    /// A sorted view; the stored order is untouched.
    pub fn sort_by(&self, key: SortKey) -> Vec<&Product> {
        ordering::sorted(&self.products, key)
    }

    /// Search then sort, as the table view applies both.
    pub fn query(&self, term: &str, key: SortKey) -> Vec<&Product> {
        ordering::sorted(self.search(term), key)
    }

    pub fn aggregate(&self) -> InventorySummary {
        InventorySummary::from_products(&self.products)
    }

    /// The id the next successful `add` will receive.
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    fn position(&self, id: ProductId) -> Result<usize, ProductError> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProductError::NotFound)
    }

    fn persist(&self) -> Result<(), RepositoryError> {
        let products = snapshot::encode_products(&self.products)?;

        // Counter first: a half-written pair must never let an id be reissued.
        self.store
            .set(NEXT_ID_KEY, &snapshot::encode_next_id(self.next_id))
            .and_then(|_| self.store.set(PRODUCTS_KEY, &products))
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to persist inventory: {}", e.detail()))
            })
    }
}
