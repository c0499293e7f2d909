//! Helpers shared by router tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use student_service::{app, ensure_students_table, store, AppState, DbConfig};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tower::ServiceExt;

/// Router over a pool that never connects. Only for requests rejected before any query.
pub fn offline_app() -> Router {
    let pool = store::connect_lazy(&DbConfig {
        host: "127.0.0.1".into(),
        port: 1,
        ..DbConfig::default()
    });
    app(AppState::new(pool))
}

/// PostgreSQL for CRUD tests: `TEST_DATABASE_URL` when set, otherwise a throwaway container.
pub struct PgFixture {
    pub pool: PgPool,
    _container: Option<ContainerAsync<GenericImage>>,
}

impl PgFixture {
    pub async fn start() -> Result<Self, String> {
        if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&url)
                .await
                .map_err(|err| format!("failed to connect TEST_DATABASE_URL: {err}"))?;
            return Self::ready(pool, None).await;
        }

        let container = GenericImage::new("postgres", "16-alpine")
            .with_exposed_port(5432.tcp())
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_env_var("POSTGRES_USER", "postgres")
            .with_env_var("POSTGRES_PASSWORD", "postgres")
            .with_env_var("POSTGRES_DB", "studentdb")
            .start()
            .await
            .map_err(|err| format!("failed to start postgres container: {err}"))?;
        let port = container
            .get_host_port_ipv4(5432.tcp())
            .await
            .map_err(|err| format!("failed to resolve postgres port: {err}"))?;
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port,
            ..DbConfig::default()
        };
        let pool = connect_with_retry(&config).await?;
        Self::ready(pool, Some(container)).await
    }

    async fn ready(pool: PgPool, container: Option<ContainerAsync<GenericImage>>) -> Result<Self, String> {
        ensure_students_table(&pool)
            .await
            .map_err(|err| format!("failed to ensure students table: {err}"))?;
        Ok(PgFixture {
            pool,
            _container: container,
        })
    }
}

// The image restarts the server once after init, so the first ready line can be early.
async fn connect_with_retry(config: &DbConfig) -> Result<PgPool, String> {
    let mut last_err = String::new();
    for _ in 0..40 {
        match PgPoolOptions::new()
            .max_connections(5)
            .connect_with(config.connect_options())
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(err) => last_err = err.to_string(),
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    Err(format!("postgres container never accepted connections: {last_err}"))
}

/// Email no other test run will use.
pub fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    format!("{}-{}-{}@test.local", tag, std::process::id(), nanos)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
