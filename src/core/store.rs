use tracing::warn;

use crate::domain::Product;
use crate::storage::{SnapshotBackend, STORAGE_KEY};

/// Ordered collection of submitted products, persisted through an injected
/// snapshot backend. The in-memory list is authoritative for the session:
/// every mutation persists the full collection afterwards, but a failed write
/// is logged and swallowed rather than rolled back.
pub struct ProductStore<B: SnapshotBackend> {
    products: Vec<Product>,
    backend: B,
}

impl<B: SnapshotBackend> ProductStore<B> {
    /// Opens the store, rehydrating from the backend when a snapshot exists.
    /// An unreadable snapshot degrades to an empty collection.
    pub fn open(backend: B) -> Self {
        let products = match backend.read(STORAGE_KEY) {
            Ok(Some(data)) => match serde_json::from_str(&data) {
                Ok(products) => products,
                Err(err) => {
                    warn!("discarding unreadable product snapshot: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("failed to read product snapshot: {err}");
                Vec::new()
            }
        };
        Self { products, backend }
    }

    /// Appends a product to the end of the collection.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
        self.persist();
    }

    /// Removes the product at `index`. Out-of-range indexes are ignored.
    pub fn remove_at(&mut self, index: usize) {
        if index >= self.products.len() {
            return;
        }
        self.products.remove(index);
        self.persist();
    }

    /// Empties the collection.
    pub fn clear(&mut self) {
        self.products.clear();
        self.persist();
    }

    /// All products, in insertion order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // Best-effort: losing a write loses durability, not session correctness.
    fn persist(&self) {
        let snapshot = match serde_json::to_string_pretty(&self.products) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("failed to serialize product snapshot: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.write(STORAGE_KEY, &snapshot) {
            warn!("failed to persist product snapshot: {err}");
        }
    }
}
