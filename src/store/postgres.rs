//! PostgreSQL-backed store and table bootstrap.

use super::StudentStore;
use crate::error::{AppError, ConfigError};
use crate::model::{NewStudent, Student};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub const STUDENTS_TABLE: &str = "students";

const COLUMNS: &str = "id, name, age, address";

/// Store over a shared pool. Each call borrows one connection for one statement.
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        PgStudentStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn insert(&self, student: &NewStudent) -> Result<Student, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, age, address) VALUES ($1, $2, $3) RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.address)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id DESC", COLUMNS, STUDENTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Student>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<Option<Student>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, STUDENTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, student: &NewStudent) -> Result<Option<Student>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $1, age = $2, address = $3 WHERE id = $4 RETURNING {}",
            STUDENTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Student>(&sql)
            .bind(&student.name)
            .bind(student.age)
            .bind(&student.address)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", STUDENTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the students table if it does not exist. Safe to call on every start.
pub async fn ensure_students_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            age INTEGER NOT NULL,
            address TEXT NOT NULL
        )
        "#,
        STUDENTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if missing.
/// Does nothing when the URL names no database or names `postgres` itself.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = maintenance_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the maintenance connection plus the target database name.
/// Host, credentials and query options (e.g. `sslmode`) are kept from `url`.
fn maintenance_options(url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(url)
        .map_err(|e| AppError::Config(ConfigError::Load(format!("invalid DATABASE_URL: {}", e))))?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgSslMode;

    #[test]
    fn maintenance_connection_keeps_host_and_options() {
        let (admin, db) = maintenance_options("postgres://u:p@db.internal:6432/students?sslmode=require")
            .unwrap()
            .unwrap();
        assert_eq!(db, "students");
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db.internal");
        assert_eq!(admin.get_port(), 6432);
        assert_eq!(admin.get_username(), "u");
        assert!(matches!(admin.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn no_bootstrap_without_a_named_database() {
        assert!(maintenance_options("postgres://app@db.internal").unwrap().is_none());
        assert!(maintenance_options("postgres://app@db.internal/postgres").unwrap().is_none());
    }

    #[test]
    fn rejects_unparseable_urls() {
        assert!(matches!(
            maintenance_options("not a url"),
            Err(AppError::Config(ConfigError::Load(_)))
        ));
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("students"), "\"students\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
