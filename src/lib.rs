//! Student service: CRUD REST API over a PostgreSQL `students` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{DbConfig, ServiceConfig};
pub use error::{AppError, ConfigError};
pub use model::{Student, StudentPayload};
pub use routes::{app, common_routes, student_routes};
pub use service::{PayloadValidator, StudentService};
pub use state::AppState;
pub use store::ensure_students_table;
