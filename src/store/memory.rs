//! In-process store. Same contract as the PostgreSQL store; ids start at 1 and are never reused.

use super::StudentStore;
use crate::error::AppError;
use crate::model::{NewStudent, Student};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Student>,
}

#[derive(Default)]
pub struct MemoryStudentStore {
    inner: Mutex<Inner>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn insert(&self, student: &NewStudent) -> Result<Student, AppError> {
        let mut g = self.lock()?;
        g.last_id = g
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("student id space exhausted".into()))?;
        let row = student.clone().into_student(g.last_id);
        g.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let g = self.lock()?;
        Ok(g.rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Student>, AppError> {
        let g = self.lock()?;
        Ok(g.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, student: &NewStudent) -> Result<Option<Student>, AppError> {
        let mut g = self.lock()?;
        Ok(g.rows.get_mut(&id).map(|row| {
            *row = student.clone().into_student(id);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut g = self.lock()?;
        Ok(g.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.lock().map(|_| ())
    }
}
