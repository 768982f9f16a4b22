//! Student lifecycle operations over any [`StudentStore`].

use crate::error::AppError;
use crate::model::Student;
use crate::service::RequestValidator;
use crate::store::StudentStore;
use serde_json::Value;
use std::collections::HashMap;

pub struct StudentService;

impl StudentService {
    /// Validate and insert. Returns the persisted row including its new id.
    pub async fn create(store: &dyn StudentStore, body: &HashMap<String, Value>) -> Result<Student, AppError> {
        let input = RequestValidator::validate_student(body)?;
        let row = store.insert(&input).await?;
        tracing::info!(id = row.id, "student created");
        Ok(row)
    }

    /// All students, newest first. Store faults are logged and yield an empty list.
    pub async fn list(store: &dyn StudentStore) -> Vec<Student> {
        match store.list().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, "failed to list students");
                Vec::new()
            }
        }
    }

    pub async fn read(store: &dyn StudentStore, id: i32) -> Result<Student, AppError> {
        store.get(id).await?.ok_or_else(|| not_found(id))
    }

    /// Replace name, age and address wholesale.
    pub async fn update(
        store: &dyn StudentStore,
        id: i32,
        body: &HashMap<String, Value>,
    ) -> Result<Student, AppError> {
        let input = RequestValidator::validate_student(body)?;
        let row = store.update(id, &input).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(id, "student updated");
        Ok(row)
    }

    pub async fn delete(store: &dyn StudentStore, id: i32) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "student deleted");
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("student {} not found", id))
}
