//! Payload validation for student writes.

use crate::error::AppError;
use crate::model::StudentPayload;
use serde_json::Value;

/// Column widths of the students table.
pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 100;
pub const GRADE_MAX_LEN: usize = 10;

pub struct PayloadValidator;

impl PayloadValidator {
    /// Decode a JSON body into a payload and check field rules. Unknown keys (including `id`) are dropped.
    pub fn parse(body: Value) -> Result<StudentPayload, AppError> {
        if !body.is_object() {
            return Err(AppError::Validation("body must be a JSON object".into()));
        }
        let payload: StudentPayload =
            serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;
        Self::validate(&payload)?;
        Ok(payload)
    }

    pub fn validate(payload: &StudentPayload) -> Result<(), AppError> {
        if payload.name.is_empty() {
            return Err(AppError::Validation("name must not be empty".into()));
        }
        check_max_len("name", &payload.name, NAME_MAX_LEN)?;
        check_max_len("email", &payload.email, EMAIL_MAX_LEN)?;
        check_max_len("grade", &payload.grade, GRADE_MAX_LEN)?;
        Ok(())
    }
}

// VARCHAR(n) counts characters, not bytes.
fn check_max_len(field: &str, v: &str, max: usize) -> Result<(), AppError> {
    if v.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
