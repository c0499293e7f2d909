//! Router assembly: common + student routes, CORS, request body limit.

mod common;
mod students;

pub use common::common_routes;
pub use students::student_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

/// Maximum accepted request body, in bytes.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Full application router. CORS allows any origin, method and header, with credentials.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(CorsLayer::very_permissive())
}
