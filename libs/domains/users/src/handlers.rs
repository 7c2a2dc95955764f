//! HTTP handlers for Users API

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{patch, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    extract_ip_from_headers, extract_user_agent,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{UserResponse, UserSignupData, UserUpdateInfoData};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(sign_up, update_info, delete_user),
    components(
        schemas(UserSignupData, UserUpdateInfoData, UserResponse),
        responses(
            BadRequestValidationResponse,
            BadRequestIdResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User account endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(sign_up))
        .route("/{id}", patch(update_info).delete(delete_user))
        .with_state(shared_service)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = UserSignupData,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn sign_up<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    headers: HeaderMap,
    ValidatedJson(data): ValidatedJson<UserSignupData>,
) -> UserResult<impl IntoResponse> {
    let user = service.sign_up(data).await?;

    AuditEvent::new(
        "user.sign_up",
        user.id.map(|id| format!("user:{id}")),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(&headers))
    .with_user_agent(extract_user_agent(&headers))
    .log();

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Update name and password
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserUpdateInfoData,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_info<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    ValidatedJson(data): ValidatedJson<UserUpdateInfoData>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_info(id, data).await?;

    AuditEvent::new("user.update", Some(format!("user:{id}")), AuditOutcome::Success)
        .with_ip(extract_ip_from_headers(&headers))
        .with_user_agent(extract_user_agent(&headers))
        .log();

    Ok(Json(UserResponse::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;

    AuditEvent::new("user.delete", Some(format!("user:{id}")), AuditOutcome::Success)
        .with_ip(extract_ip_from_headers(&headers))
        .with_user_agent(extract_user_agent(&headers))
        .log();

    Ok(StatusCode::NO_CONTENT)
}
