//! Student record as stored, and the write payload accepted by create/update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `students` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: i32,
    /// Nullable in the table; always set for rows written through the API.
    pub grade: Option<String>,
}

/// Body of POST and PUT. Any `id` in the body is ignored; PUT replaces all four fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub grade: String,
}
