use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// `save` inserts when the product has no id and overwrites the stored
/// row otherwise.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert or overwrite; the returned product always carries an id
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Remove the product with the same id; missing rows are ignored
    async fn delete(&self, product: &Product) -> ProductResult<()>;

    async fn delete_all(&self) -> ProductResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        match product.id {
            Some(id) => {
                let slot = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
                *slot = product.clone();
                tracing::info!(product_id = id, "Updated product");
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                product.id = Some(id);
                products.insert(id, product.clone());
                tracing::info!(product_id = id, "Created product");
            }
        }

        Ok(product)
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let Some(id) = product.id else {
            return Ok(());
        };

        let mut products = self.products.write().await;
        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }

    async fn delete_all(&self) -> ProductResult<()> {
        let mut products = self.products.write().await;
        let count = products.len();
        products.clear();
        tracing::info!(count, "Deleted all products");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductData;

    fn unsaved(name: &str, price: i32) -> Product {
        Product::from_data(ProductData::new(name, "Acme", price)).unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.save(unsaved("Pencil", 500)).await.unwrap();
        let second = repo.save(unsaved("Eraser", 300)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = InMemoryProductRepository::new();
        let mut saved = repo.save(unsaved("Pencil", 500)).await.unwrap();

        saved.price = 700;
        repo.save(saved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![saved]);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product {
            id: Some(99),
            ..unsaved("Ghost", 1)
        };

        let result = repo.save(ghost).await;
        assert!(matches!(result, Err(ProductError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_find_all_orders_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["c", "a", "b"] {
            repo.save(unsaved(name, 1)).await.unwrap();
        }

        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_and_delete_all() {
        let repo = InMemoryProductRepository::new();
        let pencil = repo.save(unsaved("Pencil", 500)).await.unwrap();
        repo.save(unsaved("Eraser", 300)).await.unwrap();

        repo.delete(&pencil).await.unwrap();
        assert_eq!(repo.find_by_id(1).await.unwrap(), None);

        // Deleting twice is a no-op
        repo.delete(&pencil).await.unwrap();

        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();
        let first = repo.save(unsaved("Pencil", 500)).await.unwrap();
        repo.delete(&first).await.unwrap();

        let second = repo.save(unsaved("Eraser", 300)).await.unwrap();
        assert_eq!(second.id, Some(2));
    }
}
