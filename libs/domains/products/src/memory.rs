//! In-memory product store.
//!
//! Products live for the lifetime of the process. A single `RwLock` guards
//! both the ordered list and the id index, so an insert is visible to every
//! later read in full or not at all.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};
use crate::repository::ProductRepository;

#[derive(Debug, Default)]
struct Inventory {
    products: Vec<Product>,
    index: HashMap<Uuid, usize>,
}

impl Inventory {
    fn next_id(&self) -> Uuid {
        loop {
            let id = Uuid::now_v7();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Process-local [`ProductRepository`], starts empty.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Inventory>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> ProductResult<Product> {
        let mut inventory = self.inner.write().await;

        let id = inventory.next_id();
        let product = product.into_product(id, Utc::now());

        let position = inventory.products.len();
        inventory.products.push(product.clone());
        inventory.index.insert(id, position);

        debug!(product_id = %id, total = position + 1, "Stored product");
        Ok(product)
    }

    async fn all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.inner.read().await.products.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let inventory = self.inner.read().await;
        Ok(inventory
            .index
            .get(&id)
            .and_then(|&position| inventory.products.get(position))
            .cloned())
    }

    async fn count(&self) -> ProductResult<u64> {
        Ok(self.inner.read().await.products.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProduct, Price};
    use crate::validation::validate;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn new_product(name: &str) -> NewProduct {
        validate(CreateProduct {
            name: Some(name.to_string()),
            price: Price::from_f64(10.99),
            seller_id: Some("seller123".to_string()),
            quantity: Some(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_fields() {
        let repo = InMemoryProductRepository::new();
        let product = repo.insert(new_product("Widget")).await.unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 10.99);
        assert_eq!(product.seller_id, "seller123");
        assert_eq!(product.quantity, 5);
        assert_eq!(repo.get_by_id(product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_all_preserves_insertion_order() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(new_product("A")).await.unwrap();
        let second = repo.insert(new_product("B")).await.unwrap();

        let all = repo.all().await.unwrap();
        assert_eq!(all, vec![first.clone(), second.clone()]);
        assert_ne!(first.id, second.id);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_identical_products_get_distinct_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo.insert(new_product("Same")).await.unwrap();
        let b = repo.insert(new_product("Same")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let repo = InMemoryProductRepository::new();
        repo.insert(new_product("Widget")).await.unwrap();
        assert_eq!(repo.get_by_id(Uuid::now_v7()).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_are_all_kept_with_unique_ids() {
        let repo = Arc::new(InMemoryProductRepository::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.insert(new_product(&format!("P{}", i))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let product = handle.await.unwrap().unwrap();
            assert!(ids.insert(product.id), "duplicate id {}", product.id);
        }

        let all = repo.all().await.unwrap();
        assert_eq!(all.len(), 64);
        assert_eq!(all.iter().map(|p| p.id).collect::<HashSet<_>>(), ids);
    }
}
