//! Readiness check backed by a real database round trip.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

/// 200 when PostgreSQL answers, 503 otherwise.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| format!("Database check failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::http::StatusCode;
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn state(db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/shop"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db,
        }
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let row: BTreeMap<&str, Value> = [("?column?", 1i32.into())].into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let response = ready_handler(State(state(db))).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())])
            .into_connection();

        let response = ready_handler(State(state(db))).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
