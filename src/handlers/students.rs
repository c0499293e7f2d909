//! Student CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use crate::response::{message, MessageBody};
use crate::service::{PayloadValidator, StudentService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

/// Path ids map to a SERIAL column, so anything outside i32 cannot exist.
/// The segment is parsed as given; surrounding whitespace is not an id.
pub fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid id: {}", id_str)))
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses((status = 200, description = "All students ordered by id", body = [Student]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let rows = StudentService::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id_str)?;
    let row = StudentService::get(&state.pool, id).await?;
    Ok(Json(row))
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Created student", body = Student),
        (status = 400, description = "Email already exists"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Student>, AppError> {
    let Json(body) = body?;
    let payload = PayloadValidator::parse(body)?;
    let row = StudentService::create(&state.pool, &payload).await?;
    Ok(Json(row))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Updated student", body = Student),
        (status = 404, description = "Student not found"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Student>, AppError> {
    let id = parse_id(&id_str)?;
    let Json(body) = body?;
    let payload = PayloadValidator::parse(body)?;
    let row = StudentService::update(&state.pool, id, &payload).await?;
    Ok(Json(row))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let id = parse_id(&id_str)?;
    StudentService::delete(&state.pool, id).await?;
    Ok(Json(message("Student deleted successfully")))
}
