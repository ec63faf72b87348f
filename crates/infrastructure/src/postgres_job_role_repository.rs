//! PostgreSQL-backed job role repository.

use async_trait::async_trait;
use sqlx::PgPool;
use talentsoft_application::JobRoleRepository;
use talentsoft_core::{AppError, AppResult, PermissionClass};
use talentsoft_domain::{JobRole, JobRoleId, JobRoleProfile};

use crate::postgres_errors::{insert_error, query_error};

/// PostgreSQL implementation of the job role repository port.
#[derive(Clone)]
pub struct PostgresJobRoleRepository {
    pool: PgPool,
}

impl PostgresJobRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct JobRoleRow {
    id: i64,
    name: String,
    description: Option<String>,
    permission_class: String,
}

impl TryFrom<JobRoleRow> for JobRole {
    type Error = AppError;

    fn try_from(row: JobRoleRow) -> Result<Self, Self::Error> {
        let permission_class = row.permission_class.parse::<PermissionClass>()?;
        let profile = JobRoleProfile::new(row.name, row.description, permission_class)?;
        Ok(JobRole::new(JobRoleId::new(row.id), profile))
    }
}

#[async_trait]
impl JobRoleRepository for PostgresJobRoleRepository {
    async fn create(&self, profile: JobRoleProfile) -> AppResult<JobRole> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO job_roles (name, description, permission_class)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(profile.name().as_str())
        .bind(profile.description())
        .bind(profile.permission_class().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            insert_error(
                error,
                "create job role",
                &format!("job role '{}' already exists", profile.name()),
            )
        })?;

        Ok(JobRole::new(JobRoleId::new(id), profile))
    }

    async fn find_by_id(&self, role_id: JobRoleId) -> AppResult<Option<JobRole>> {
        sqlx::query_as::<_, JobRoleRow>(
            r#"
            SELECT id, name, description, permission_class
            FROM job_roles
            WHERE id = $1
            "#,
        )
        .bind(role_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| query_error(error, "find job role"))?
        .map(JobRole::try_from)
        .transpose()
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<JobRole>> {
        sqlx::query_as::<_, JobRoleRow>(
            r#"
            SELECT id, name, description, permission_class
            FROM job_roles
            WHERE name = $1
            "#,
        )
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| query_error(error, "find job role by name"))?
        .map(JobRole::try_from)
        .transpose()
    }

    async fn list(&self) -> AppResult<Vec<JobRole>> {
        sqlx::query_as::<_, JobRoleRow>(
            r#"
            SELECT id, name, description, permission_class
            FROM job_roles
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| query_error(error, "list job roles"))?
        .into_iter()
        .map(JobRole::try_from)
        .collect()
    }
}
