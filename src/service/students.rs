//! Student CRUD against PostgreSQL. One parameterized statement per operation.

use crate::error::AppError;
use crate::model::{Student, StudentPayload};
use sqlx::PgPool;

const SELECT_ALL: &str = "SELECT id, name, email, age, grade FROM students ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email, age, grade FROM students WHERE id = $1";
const INSERT: &str = "INSERT INTO students (name, email, age, grade) VALUES ($1, $2, $3, $4) \
                      RETURNING id, name, email, age, grade";
const UPDATE: &str = "UPDATE students SET name = $1, email = $2, age = $3, grade = $4 WHERE id = $5 \
                      RETURNING id, name, email, age, grade";
const DELETE: &str = "DELETE FROM students WHERE id = $1";

pub struct StudentService;

impl StudentService {
    /// All rows ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Student>(SELECT_ALL).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn get(pool: &PgPool, id: i32) -> Result<Student, AppError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        sqlx::query_as::<_, Student>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(AppError::student_not_found)
    }

    /// Insert; the store assigns the id. Duplicate email surfaces as `AppError::Conflict`.
    pub async fn create(pool: &PgPool, payload: &StudentPayload) -> Result<Student, AppError> {
        tracing::debug!(sql = %INSERT, email = %payload.email, "query");
        let row = sqlx::query_as::<_, Student>(INSERT)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.age)
            .bind(&payload.grade)
            .fetch_one(pool)
            .await?;
        tracing::info!(id = row.id, "student created");
        Ok(row)
    }

    /// Replace all fields of row `id`.
    pub async fn update(pool: &PgPool, id: i32, payload: &StudentPayload) -> Result<Student, AppError> {
        tracing::debug!(sql = %UPDATE, id, "query");
        sqlx::query_as::<_, Student>(UPDATE)
            .bind(&payload.name)
            .bind(&payload.email)
            .bind(payload.age)
            .bind(&payload.grade)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(AppError::student_not_found)
    }

    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE, id, "query");
        let result = sqlx::query(DELETE).bind(id).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::student_not_found());
        }
        tracing::info!(id, "student deleted");
        Ok(())
    }
}
