//! # Axum Helpers
//!
//! Shared HTTP plumbing for the shop services.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body
//! - **[`extractors`]**: [`IdPath`] and [`ValidatedJson`]
//! - **[`audit`]**: audit events for data changes
//!
//! ```ignore
//! let router = axum_helpers::create_router::<ApiDoc>(api_routes).await?;
//! let app = router.merge(axum_helpers::health_router(core_config::app_info!()));
//! axum_helpers::create_production_app(app, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks, shutdown_signal,
};

pub use http::{cors_layer_from_env, create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
