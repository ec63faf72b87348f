use super::*;

impl PostgresProjectAssignmentRepository {
    pub(super) async fn insert_impl(&self, assignment: ProjectAssignment) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO project_assignments (employee_id, project_id, role, assigned_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(assignment.employee_id().as_i64())
        .bind(assignment.project_id().as_i64())
        .bind(assignment.role().as_str())
        .bind(assignment.assigned_at())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            insert_error(
                error,
                "insert project assignment",
                &format!(
                    "employee '{}' is already assigned to project '{}'",
                    assignment.employee_id(),
                    assignment.project_id()
                ),
            )
        })?;

        Ok(())
    }

    pub(super) async fn update_role_impl(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &ProjectRole,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE project_assignments
            SET role = $3
            WHERE employee_id = $1 AND project_id = $2
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(project_id.as_i64())
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(|error| query_error(error, "update project role"))?;

        Ok(result.rows_affected() > 0)
    }

    pub(super) async fn delete_impl(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM project_assignments
            WHERE employee_id = $1 AND project_id = $2
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(project_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|error| query_error(error, "delete project assignment"))?;

        Ok(result.rows_affected() > 0)
    }
}
