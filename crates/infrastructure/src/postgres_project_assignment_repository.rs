//! PostgreSQL-backed project assignment repository.
//!
//! The composite primary key on (employee_id, project_id) is the duplicate
//! guard; a second insert surfaces as SQLSTATE 23505.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use talentsoft_application::ProjectAssignmentRepository;
use talentsoft_core::{AppError, AppResult, EmployeeId};
use talentsoft_domain::{ProjectAssignment, ProjectId, ProjectRole};
use tracing::debug;

use crate::postgres_errors::{insert_error, query_error};

/// PostgreSQL implementation of the project assignment repository port.
#[derive(Clone)]
pub struct PostgresProjectAssignmentRepository {
    pool: PgPool,
}

impl PostgresProjectAssignmentRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AssignmentRow {
    employee_id: i64,
    project_id: i64,
    role: String,
    assigned_at: DateTime<Utc>,
}

impl From<AssignmentRow> for ProjectAssignment {
    fn from(row: AssignmentRow) -> Self {
        ProjectAssignment::new(
            EmployeeId::new(row.employee_id),
            ProjectId::new(row.project_id),
            ProjectRole::new(row.role),
            row.assigned_at,
        )
    }
}

fn into_assignments(rows: Vec<AssignmentRow>) -> Vec<ProjectAssignment> {
    rows.into_iter().map(ProjectAssignment::from).collect()
}

mod commands;

#[async_trait]
impl ProjectAssignmentRepository for PostgresProjectAssignmentRepository {
    async fn insert(&self, assignment: ProjectAssignment) -> AppResult<()> {
        self.insert_impl(assignment).await
    }

    async fn find(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectAssignment>> {
        sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT employee_id, project_id, role, assigned_at
            FROM project_assignments
            WHERE employee_id = $1 AND project_id = $2
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(project_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| query_error(error, "find project assignment"))
        .map(|row| row.map(ProjectAssignment::from))
    }

    async fn update_role(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &ProjectRole,
    ) -> AppResult<bool> {
        self.update_role_impl(employee_id, project_id, role).await
    }

    async fn delete(&self, employee_id: EmployeeId, project_id: ProjectId) -> AppResult<bool> {
        self.delete_impl(employee_id, project_id).await
    }

    async fn list_for_project(&self, project_id: ProjectId) -> AppResult<Vec<ProjectAssignment>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT employee_id, project_id, role, assigned_at
            FROM project_assignments
            WHERE project_id = $1
            ORDER BY employee_id
            "#,
        )
        .bind(project_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| query_error(error, "list project assignments"))?;

        Ok(into_assignments(rows))
    }

    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<ProjectAssignment>> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT employee_id, project_id, role, assigned_at
            FROM project_assignments
            WHERE employee_id = $1
            ORDER BY project_id
            "#,
        )
        .bind(employee_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| query_error(error, "list employee assignments"))?;

        Ok(into_assignments(rows))
    }

    async fn count_for_project(&self, project_id: ProjectId) -> AppResult<u64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM project_assignments WHERE project_id = $1",
        )
        .bind(project_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| query_error(error, "count project assignments"))?;

        u64::try_from(count)
            .map_err(|error| AppError::Internal(format!("invalid assignment count: {error}")))
    }

    async fn delete_for_employee(&self, employee_id: EmployeeId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM project_assignments WHERE employee_id = $1")
            .bind(employee_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| query_error(error, "delete employee assignments"))?;

        debug!(employee_id = %employee_id, removed = result.rows_affected(), "assignments cleared");
        Ok(result.rows_affected())
    }

    async fn delete_for_project(&self, project_id: ProjectId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM project_assignments WHERE project_id = $1")
            .bind(project_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| query_error(error, "delete project assignments"))?;

        debug!(project_id = %project_id, removed = result.rows_affected(), "assignments cleared");
        Ok(result.rows_affected())
    }
}
