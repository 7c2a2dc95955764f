use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> UserResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Insert when `id` is `None`, overwrite otherwise
    async fn save(&self, user: User) -> UserResult<User>;

    /// Missing rows are ignored
    async fn delete(&self, user: &User) -> UserResult<()>;

    async fn delete_all(&self) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, mut user: User) -> UserResult<User> {
        let mut users = self.users.write().await;

        if let Some(id) = user.id {
            let slot = users.get_mut(&id).ok_or(UserError::NotFound(id))?;
            *slot = user.clone();
            tracing::info!(user_id = id, "Updated user");
            return Ok(user);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        user.id = Some(id);
        users.insert(id, user.clone());

        tracing::info!(user_id = id, "Created user");
        Ok(user)
    }

    async fn delete(&self, user: &User) -> UserResult<()> {
        if let Some(id) = user.id {
            let mut users = self.users.write().await;
            if users.remove(&id).is_some() {
                tracing::info!(user_id = id, "Deleted user");
            }
        }
        Ok(())
    }

    async fn delete_all(&self) -> UserResult<()> {
        self.users.write().await.clear();
        tracing::info!("Deleted all users");
        Ok(())
    }
}
