//! PostgreSQL-backed credential repository.

use async_trait::async_trait;
use sqlx::PgPool;
use talentsoft_application::CredentialRepository;
use talentsoft_core::{AppResult, EmployeeId};

use crate::postgres_errors::{insert_error, query_error};

/// PostgreSQL implementation of the credential repository port.
#[derive(Clone)]
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn save_password_hash(
        &self,
        employee_id: EmployeeId,
        password_hash: &str,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employee_credentials (employee_id, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (employee_id)
            DO UPDATE SET password_hash = EXCLUDED.password_hash, updated_at = now()
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|error| insert_error(error, "save password hash", "credential already exists"))?;

        Ok(())
    }

    async fn find_password_hash(&self, employee_id: EmployeeId) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT password_hash FROM employee_credentials WHERE employee_id = $1",
        )
        .bind(employee_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| query_error(error, "find password hash"))
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employee_credentials WHERE employee_id = $1")
            .bind(employee_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| query_error(error, "delete credential"))?;

        Ok(result.rows_affected() > 0)
    }
}
