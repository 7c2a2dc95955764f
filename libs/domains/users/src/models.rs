use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A registered shop user.
///
/// Holds the password, so it is never serialized directly to clients;
/// see [`UserResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Assigned by storage on first save
    pub id: Option<i64>,
    pub email: String,
    pub name: String,
    pub password: String,
}

impl User {
    /// Email stays as registered.
    pub fn update_info(&mut self, data: UserUpdateInfoData) {
        self.name = data.name;
        self.password = data.password;
    }
}

/// Rejects empty and whitespace-only strings.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Sign-up request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserSignupData {
    #[validate(email(message = "must be a well-formed email address"))]
    #[schema(example = "kimchi@joa.com")]
    pub email: String,

    #[validate(custom(function = "non_blank"))]
    #[schema(example = "Kim")]
    pub name: String,

    #[validate(custom(function = "non_blank"))]
    pub password: String,
}

/// Profile update request body
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserUpdateInfoData {
    #[validate(custom(function = "non_blank"))]
    pub name: String,

    #[validate(custom(function = "non_blank"))]
    pub password: String,
}

/// User as returned by the API (no password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Option<i64>,
    pub email: String,
    pub name: String,
}

impl From<UserSignupData> for User {
    fn from(data: UserSignupData) -> Self {
        Self {
            id: None,
            email: data.email,
            name: data.name,
            password: data.password,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}
