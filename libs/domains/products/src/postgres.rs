use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Product::from))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        let model = match id {
            Some(id) => self.base.update(active_model).await.map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => ProductError::from(other),
            })?,
            None => self.base.insert(active_model).await?,
        };

        if id.is_some() {
            tracing::info!(product_id = model.id, "Updated product");
        } else {
            tracing::info!(product_id = model.id, "Created product");
        }
        Ok(model.into())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let Some(id) = product.id else {
            return Ok(());
        };

        let rows = self.base.delete_by_id(id).await?;
        if rows > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }

    async fn delete_all(&self) -> ProductResult<()> {
        let rows = self.base.delete_all().await?;
        tracing::info!(count = rows, "Deleted all products");
        Ok(())
    }
}
