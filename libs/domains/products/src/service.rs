//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductData};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Required-field checks and fetch-or-NotFound live here; storage stays
/// behind the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Every stored product, ordered by id
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Requires name, maker and price; the first missing one is reported.
    #[instrument(skip(self, data))]
    pub async fn create_product(&self, data: ProductData) -> ProductResult<Product> {
        let product = Product::from_data(data)?;
        self.repository.save(product).await
    }

    /// Absent fields keep their stored value.
    #[instrument(skip(self, data))]
    pub async fn update_product(&self, id: i64, data: ProductData) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.apply_data(data)?;
        self.repository.save(product).await
    }

    /// Returns the product as it was before removal.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> ProductResult<Product> {
        let product = self.get_product(id).await?;
        self.repository.delete(&product).await?;
        Ok(product)
    }
}
