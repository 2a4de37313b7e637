//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product};
use crate::repository::ProductRepository;
use crate::validation::validate;

/// Product service providing business logic operations
///
/// Validates candidates before anything reaches the repository, so a
/// rejected create never changes the stored set.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new product
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let candidate = validate(input).map_err(ProductError::Validation)?;

        let product = self.repository.insert(candidate).await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Every stored product, oldest first
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.all().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Price;
    use crate::repository::MockProductRepository;
    use chrono::Utc;

    fn widget() -> CreateProduct {
        CreateProduct {
            name: Some("Widget".to_string()),
            price: Price::from_f64(10.99),
            seller_id: Some("seller123".to_string()),
            quantity: Some(5),
        }
    }

    #[tokio::test]
    async fn test_create_product_stores_valid_candidate() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_insert()
            .withf(|p| p.name() == "Widget" && p.quantity() == 5)
            .times(1)
            .returning(|p| Ok(p.into_product(Uuid::now_v7(), Utc::now())));

        let service = ProductService::new(mock_repo);
        let product = service.create_product(widget()).await.unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 10.99);
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_insert().never();

        let service = ProductService::new(mock_repo);
        let candidate = CreateProduct {
            name: Some(String::new()),
            price: Some(Price::from(0i64)),
            ..widget()
        };

        let err = service.create_product(candidate).await.unwrap_err();
        match err {
            ProductError::Validation(failure) => {
                assert_eq!(failure.fields(), vec!["name", "price"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(ProductError::StorageUnavailable("offline".to_string())));

        let service = ProductService::new(mock_repo);
        let err = service.create_product(widget()).await.unwrap_err();

        assert!(matches!(err, ProductError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(id))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(id).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_list_and_count_delegate_to_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_all().returning(|| Ok(Vec::new()));
        mock_repo.expect_count().returning(|| Ok(0));

        let service = ProductService::new(mock_repo);

        assert!(service.list_products().await.unwrap().is_empty());
        assert_eq!(service.count_products().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_count().times(2).returning(|| Ok(3));

        let service = ProductService::new(mock_repo);
        let clone = service.clone();

        assert_eq!(service.count_products().await.unwrap(), 3);
        assert_eq!(clone.count_products().await.unwrap(), 3);
    }
}
