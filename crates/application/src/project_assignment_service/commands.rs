use chrono::Utc;

use super::*;

impl ProjectAssignmentService {
    /// Links an employee to a project with a project role.
    ///
    /// Returns `Ok(false)` when either entity is missing, the pair is
    /// already linked or the role is too long. The existing row is left
    /// untouched in that case.
    pub async fn assign(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &str,
    ) -> AppResult<bool> {
        let result = self
            .try_assign(employee_id, project_id, role)
            .await
            .map(|_| ());
        rejected_as_false(result, "assign")
    }

    /// Links an employee to a project, reporting why a link was refused.
    ///
    /// Missing entities fail with `NotFound`, an existing link with
    /// `Conflict` and a role over the length bound with `Validation`.
    /// The conflict comes from the store's unique key, so two concurrent
    /// calls cannot both succeed.
    pub async fn try_assign(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &str,
    ) -> AppResult<ProjectAssignment> {
        self.ensure_pair_exists(employee_id, project_id).await?;
        let role = ProjectRole::bounded(role)?;

        let assignment = ProjectAssignment::new(employee_id, project_id, role, Utc::now());
        self.assignment_repository
            .insert(assignment.clone())
            .await
            .map_err(|error| match error {
                AppError::Conflict(_) => AppError::Conflict(format!(
                    "employee '{employee_id}' is already assigned to project '{project_id}'"
                )),
                other => other,
            })?;

        info!(
            employee_id = %employee_id,
            project_id = %project_id,
            role = assignment.role().as_str(),
            "employee assigned to project"
        );

        Ok(assignment)
    }

    /// Unlinks an employee from a project.
    ///
    /// Returns `Ok(false)` only when either entity is missing. Removing a
    /// link that does not exist reports success.
    pub async fn remove(&self, employee_id: EmployeeId, project_id: ProjectId) -> AppResult<bool> {
        let result = self.try_remove(employee_id, project_id).await.map(|_| ());
        rejected_as_false(result, "remove")
    }

    /// Unlinks an employee from a project and returns whether a row was deleted.
    pub async fn try_remove(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<bool> {
        self.ensure_pair_exists(employee_id, project_id).await?;

        let deleted = self
            .assignment_repository
            .delete(employee_id, project_id)
            .await?;

        if deleted {
            info!(
                employee_id = %employee_id,
                project_id = %project_id,
                "employee removed from project"
            );
        } else {
            debug!(
                employee_id = %employee_id,
                project_id = %project_id,
                "remove requested for an absent project assignment"
            );
        }

        Ok(deleted)
    }

    /// Overwrites the project role of an existing link.
    ///
    /// Returns `Ok(false)` and creates nothing when the pair is not linked.
    pub async fn update_role(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        new_role: &str,
    ) -> AppResult<bool> {
        let result = self
            .try_update_role(employee_id, project_id, new_role)
            .await
            .map(|_| ());
        rejected_as_false(result, "update_role")
    }

    /// Overwrites the project role of an existing link, failing with
    /// `NotFound` when the pair is not linked.
    pub async fn try_update_role(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        new_role: &str,
    ) -> AppResult<ProjectAssignment> {
        let not_assigned = || {
            AppError::NotFound(format!(
                "employee '{employee_id}' is not assigned to project '{project_id}'"
            ))
        };

        let mut assignment = self
            .find_assignment(employee_id, project_id)
            .await?
            .ok_or_else(not_assigned)?;
        let role = ProjectRole::bounded(new_role)?;

        if !self
            .assignment_repository
            .update_role(employee_id, project_id, &role)
            .await?
        {
            return Err(not_assigned());
        }

        info!(
            employee_id = %employee_id,
            project_id = %project_id,
            role = role.as_str(),
            "project role updated"
        );

        assignment.set_role(role);
        Ok(assignment)
    }
}
