//! Student records: REST backend for student entries (name, age, address) on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{NewStudent, Student};
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_students_table, MemoryStudentStore, PgStudentStore, StudentStore,
};
