use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors::cors_layer_from_env, security::security_headers};
use axum::{middleware, Router};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Wrap the API routes with documentation UIs and cross-cutting middleware.
///
/// - `apis` is nested under `/api`; it must already carry its state
/// - OpenAPI JSON at `/api-docs/openapi.json`, served by Swagger UI
///   (`/swagger-ui`), ReDoc (`/redoc`), RapiDoc (`/rapidoc`) and Scalar (`/scalar`)
/// - unknown paths fall back to a JSON 404
/// - request tracing, security headers, CORS and response compression
///
/// Fails when `CORS_ALLOWED_ORIGIN` is missing, empty or malformed.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve with coordinated shutdown.
///
/// On SIGINT/SIGTERM the server stops accepting connections and `cleanup`
/// runs, bounded by `shutdown_timeout`. Returns once both are done.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_coordinator = coordinator.clone();
    tokio::spawn(async move { signal_coordinator.wait_for_signal().await });

    let mut cleanup_rx = coordinator.subscribe();
    let cleanup_handle = tokio::spawn(async move {
        let _ = cleanup_rx.recv().await;

        info!(timeout = ?shutdown_timeout, "Starting cleanup tasks");
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed"),
            Err(_) => tracing::warn!(timeout = ?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    // Unblock cleanup if the server stopped for another reason.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
