//! PostgreSQL-backed project repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use talentsoft_application::ProjectRepository;
use talentsoft_core::{AppError, AppResult};
use talentsoft_domain::{Project, ProjectId, ProjectProfile};

use crate::postgres_errors::{insert_error, query_error, write_error};

/// PostgreSQL implementation of the project repository port.
#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    status: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = AppError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let profile = ProjectProfile::new(
            row.name,
            row.description,
            row.start_date,
            row.end_date,
            Some(row.status),
        )?;
        Ok(Project::new(ProjectId::new(row.id), profile))
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn create(&self, profile: ProjectProfile) -> AppResult<Project> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO projects (name, description, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(profile.name())
        .bind(profile.description())
        .bind(profile.start_date())
        .bind(profile.end_date())
        .bind(profile.status())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| insert_error(error, "create project", "project already exists"))?;

        Ok(Project::new(ProjectId::new(id), profile))
    }

    async fn update(
        &self,
        project_id: ProjectId,
        profile: ProjectProfile,
    ) -> AppResult<Option<Project>> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET name = $2,
                description = $3,
                start_date = $4,
                end_date = $5,
                status = $6,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(project_id.as_i64())
        .bind(profile.name())
        .bind(profile.description())
        .bind(profile.start_date())
        .bind(profile.end_date())
        .bind(profile.status())
        .execute(&self.pool)
        .await
        .map_err(|error| write_error(error, "update project", "project already exists"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Project::new(project_id, profile)))
    }

    async fn find_by_id(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, start_date, end_date, status
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(project_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| query_error(error, "find project"))?
        .map(Project::try_from)
        .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, start_date, end_date, status
            FROM projects
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| query_error(error, "list projects"))?
        .into_iter()
        .map(Project::try_from)
        .collect()
    }

    async fn delete(&self, project_id: ProjectId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(project_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| write_error(error, "delete project", "project is in use"))?;

        Ok(result.rows_affected() > 0)
    }
}
