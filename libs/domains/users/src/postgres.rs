use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::User,
    repository::UserRepository,
};

#[derive(Clone)]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let models = self.base.find_all().await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(User::from))
    }

    async fn save(&self, user: User) -> UserResult<User> {
        let Some(id) = user.id else {
            let model = self.base.insert(entity::ActiveModel::from(user)).await?;
            tracing::info!(user_id = model.id, "Created user");
            return Ok(model.into());
        };

        let model = self
            .base
            .update(entity::ActiveModel::from(user))
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => UserError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, user: &User) -> UserResult<()> {
        if let Some(id) = user.id {
            let rows = self.base.delete_by_id(id).await?;
            if rows > 0 {
                tracing::info!(user_id = id, "Deleted user");
            }
        }
        Ok(())
    }

    async fn delete_all(&self) -> UserResult<()> {
        let rows = self.base.delete_all().await?;
        tracing::info!(count = rows, "Deleted all users");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(id: i64) -> entity::Model {
        entity::Model {
            id,
            email: "kimchi@joa.com".into(),
            name: "Kim".into(),
            password: "pw".into(),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(11)]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo
            .save(User {
                id: None,
                email: "kimchi@joa.com".into(),
                name: "Kim".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, Some(11));
        assert_eq!(user.password, "pw");
    }

    #[tokio::test]
    async fn test_find_by_id_maps_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(3)]])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let user = repo.find_by_id(3).await.unwrap().unwrap();
        assert_eq!(user.email, "kimchi@joa.com");
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgUserRepository::new(db);

        let result = repo.save(User::from(row(100))).await;
        assert!(matches!(result, Err(UserError::NotFound(100))));
    }

    #[tokio::test]
    async fn test_query_failure_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".into())])
            .into_connection();
        let repo = PgUserRepository::new(db);

        assert!(matches!(repo.find_by_id(1).await, Err(UserError::Internal(_))));
    }
}
