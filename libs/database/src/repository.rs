//! Generic CRUD over a SeaORM entity.
//!
//! Domain crates wrap [`BaseRepository`] in their own repository types and
//! add the entity-specific conversions and logging on top:
//!
//! ```ignore
//! pub struct PgProductRepository {
//!     base: BaseRepository<entity::Entity>,
//! }
//! ```

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use std::marker::PhantomData;

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Connection for queries the base does not cover.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Every row, ordered by primary key.
    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        query.all(&self.db).await
    }

    pub async fn find_by_id<T>(&self, id: T) -> Result<Option<E::Model>, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Fails with `DbErr::RecordNotUpdated` when no row has the model's key.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Returns the number of deleted rows (0 or 1).
    pub async fn delete_by_id<T>(&self, id: T) -> Result<u64, DbErr>
    where
        T: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = E::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
