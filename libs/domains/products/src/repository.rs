use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{NewProduct, Product};

/// Repository trait for Product persistence
///
/// Implementations own the authoritative product set. `insert` must assign
/// the identifier and make the product visible atomically with respect to
/// other inserts; `all` must return a consistent snapshot in insertion order.
/// Backends that can become unreachable report `ProductError::StorageUnavailable`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a validated product under a fresh, never-reused identifier
    async fn insert(&self, product: NewProduct) -> ProductResult<Product>;

    /// Every stored product, first created first
    async fn all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<u64>;
}
