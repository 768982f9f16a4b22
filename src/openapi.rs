//! OpenAPI description of the student routes, served at `/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::students;
use crate::model::{Student, StudentPayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        students::list_students,
        students::create_student,
        students::read_student,
        students::update_student,
        students::delete_student
    ),
    components(schemas(Student, StudentPayload, ErrorBody, ErrorDetail)),
    tags((name = "students", description = "Student record lifecycle"))
)]
pub struct ApiDoc;
