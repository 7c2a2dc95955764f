/// Unified error type for connection management and health checks.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SeaORM errors
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
