//! OpenAPI document for the student API, served at `/openapi.json`.

use crate::handlers::students;
use crate::model::{Student, StudentPayload};
use crate::response::MessageBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Student Management API"),
    paths(
        students::list,
        students::read,
        students::create,
        students::update,
        students::delete,
    ),
    components(schemas(Student, StudentPayload, MessageBody)),
    tags((name = "students", description = "Student record CRUD"))
)]
pub struct ApiDoc;
