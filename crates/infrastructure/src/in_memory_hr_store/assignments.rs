use super::*;

#[async_trait]
impl ProjectAssignmentRepository for InMemoryHrStore {
    async fn insert(&self, assignment: ProjectAssignment) -> AppResult<()> {
        let key = (assignment.employee_id(), assignment.project_id());
        let mut assignments = self.assignments.write().await;

        let employee_exists = self.employees.read().await.contains_key(&key.0);
        let project_exists = self.projects.read().await.contains_key(&key.1);
        if !employee_exists || !project_exists {
            return Err(AppError::NotFound(format!(
                "employee '{}' or project '{}' does not exist",
                key.0, key.1
            )));
        }

        if assignments.contains_key(&key) {
            return Err(AppError::Conflict(format!(
                "employee '{}' is already assigned to project '{}'",
                key.0, key.1
            )));
        }

        assignments.insert(key, assignment);
        Ok(())
    }

    async fn find(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectAssignment>> {
        Ok(self
            .assignments
            .read()
            .await
            .get(&(employee_id, project_id))
            .cloned())
    }

    async fn update_role(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &ProjectRole,
    ) -> AppResult<bool> {
        let mut assignments = self.assignments.write().await;
        let Some(assignment) = assignments.get_mut(&(employee_id, project_id)) else {
            return Ok(false);
        };

        assignment.set_role(role.clone());
        Ok(true)
    }

    async fn delete(&self, employee_id: EmployeeId, project_id: ProjectId) -> AppResult<bool> {
        Ok(self
            .assignments
            .write()
            .await
            .remove(&(employee_id, project_id))
            .is_some())
    }

    async fn list_for_project(&self, project_id: ProjectId) -> AppResult<Vec<ProjectAssignment>> {
        let mut listed: Vec<ProjectAssignment> = self
            .assignments
            .read()
            .await
            .values()
            .filter(|assignment| assignment.project_id() == project_id)
            .cloned()
            .collect();
        listed.sort_by_key(ProjectAssignment::employee_id);
        Ok(listed)
    }

    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<ProjectAssignment>> {
        let mut listed: Vec<ProjectAssignment> = self
            .assignments
            .read()
            .await
            .values()
            .filter(|assignment| assignment.employee_id() == employee_id)
            .cloned()
            .collect();
        listed.sort_by_key(ProjectAssignment::project_id);
        Ok(listed)
    }

    async fn count_for_project(&self, project_id: ProjectId) -> AppResult<u64> {
        let count = self
            .assignments
            .read()
            .await
            .keys()
            .filter(|(_, linked_project_id)| *linked_project_id == project_id)
            .count();
        Ok(count as u64)
    }

    async fn delete_for_employee(&self, employee_id: EmployeeId) -> AppResult<u64> {
        let mut assignments = self.assignments.write().await;
        let before = assignments.len();
        assignments.retain(|(linked_employee_id, _), _| *linked_employee_id != employee_id);
        Ok((before - assignments.len()) as u64)
    }

    async fn delete_for_project(&self, project_id: ProjectId) -> AppResult<u64> {
        let mut assignments = self.assignments.write().await;
        let before = assignments.len();
        assignments.retain(|(_, linked_project_id), _| *linked_project_id != project_id);
        Ok((before - assignments.len()) as u64)
    }
}
