//! Shared application state for all routes.

use sqlx::PgPool;

/// Owns the pool for the lifetime of the server; handlers receive it via `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
