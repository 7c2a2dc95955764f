//! JSON extractor with `validator` checks applied.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Deserializes the body as JSON and runs [`Validate::validate`] on it.
///
/// Body parse failures go through [`AppError::JsonExtractorRejection`] and
/// rule violations through [`AppError::ValidationError`].
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct UserSignupData {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn sign_up(ValidatedJson(data): ValidatedJson<UserSignupData>) -> String {
///     data.email
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}
