//! Record store: the persistence seam behind the student API.

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::{ensure_database_exists, ensure_students_table, PgStudentStore, STUDENTS_TABLE};

use crate::error::AppError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;

/// One statement per call. Implementations must be safe to share across requests.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a row; the store assigns `id`.
    async fn insert(&self, student: &NewStudent) -> Result<Student, AppError>;

    /// All rows, highest `id` first.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Student>, AppError>;

    /// Replace every mutable field. Returns None when `id` does not exist.
    async fn update(&self, id: i32, student: &NewStudent) -> Result<Option<Student>, AppError>;

    /// Returns false when `id` does not exist.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Cheap liveness check used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
