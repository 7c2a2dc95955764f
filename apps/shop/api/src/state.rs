//! Application state management.
//!
//! Shared by the route builders and the readiness endpoint.

/// Shared application state.
///
/// Cloned per handler; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
