//! Shared application state for all routes. The store is created once at start and reused by every request.

use crate::store::{PgStudentStore, StudentStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        AppState { store }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgStudentStore::new(pool)))
    }
}
