//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserSignupData, UserUpdateInfoData};
use crate::repository::UserRepository;

/// User service
///
/// Request bodies are validated at the HTTP boundary; the service only
/// enforces existence.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user
    #[instrument(skip(self, data))]
    pub async fn sign_up(&self, data: UserSignupData) -> UserResult<User> {
        let user = self.repository.save(User::from(data)).await?;
        tracing::debug!(user_id = ?user.id, "Signed up user");
        Ok(user)
    }

    /// Replace name and password
    #[instrument(skip(self, data))]
    pub async fn update_info(&self, id: i64, data: UserUpdateInfoData) -> UserResult<User> {
        let mut user = self.find_user(id).await?;
        user.update_info(data);
        self.repository.save(user).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        let user = self.find_user(id).await?;
        self.repository.delete(&user).await
    }

    async fn find_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}
