//! Student CRUD routes under `/api/students`.

use crate::handlers::students::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/students", get(list).post(create))
        .route(
            "/api/students/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
