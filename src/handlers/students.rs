//! Student handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{Student, StudentPayload};
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid id: {}", id_str)))
}

fn body_to_map(body: Result<Json<Value>, JsonRejection>) -> Result<HashMap<String, Value>, AppError> {
    let Json(value) = body?;
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::Validation("body must be a JSON object".into())),
    }
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    responses((status = 200, description = "All students, newest first", body = [Student]))
)]
pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    success_many(StudentService::list(state.store.as_ref()).await)
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let row = StudentService::create(state.store.as_ref(), &body).await?;
    Ok(success_one(row))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "The student", body = Student),
        (status = 404, description = "No such student", body = ErrorBody)
    )
)]
pub async fn read_student(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = StudentService::read(state.store.as_ref(), id).await?;
    Ok(success_one_ok(row))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Updated student", body = Student),
        (status = 400, description = "Missing or malformed field", body = ErrorBody),
        (status = 404, description = "No such student", body = ErrorBody)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let body = body_to_map(body)?;
    let row = StudentService::update(state.store.as_ref(), id, &body).await?;
    Ok(success_one_ok(row))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "No such student", body = ErrorBody)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    StudentService::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
