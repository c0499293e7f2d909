//! StudentService: SQL per operation, plus payload validation.

mod students;
mod validation;
pub use students::StudentService;
pub use validation::{PayloadValidator, EMAIL_MAX_LEN, GRADE_MAX_LEN, NAME_MAX_LEN};
