//! Pool construction and `students` table DDL.

use crate::config::DbConfig;
use crate::error::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub const STUDENTS_TABLE: &str = "students";

const STUDENTS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100) UNIQUE NOT NULL,
        age INTEGER NOT NULL,
        grade VARCHAR(10)
    )
"#;

/// Open the pool and wait for a first connection. Failure here is fatal for the service.
pub async fn connect(config: &DbConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Pool that connects on first use. For wiring routers where no query is expected to run.
pub fn connect_lazy(config: &DbConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

/// Create the students table if it does not exist. Idempotent.
pub async fn ensure_students_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(STUDENTS_DDL).execute(pool).await?;
    tracing::info!(table = STUDENTS_TABLE, "table ensured");
    Ok(())
}

/// Close all pooled connections; waits for checked-out connections to be returned.
pub async fn close(pool: &PgPool) {
    pool.close().await;
    tracing::info!("database pool closed");
}
