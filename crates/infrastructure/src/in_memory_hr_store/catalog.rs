use super::*;

#[async_trait]
impl JobRoleRepository for InMemoryHrStore {
    async fn create(&self, profile: JobRoleProfile) -> AppResult<JobRole> {
        let mut job_roles = self.job_roles.write().await;
        if job_roles
            .values()
            .any(|role| role.name() == profile.name().as_str())
        {
            return Err(AppError::Conflict(format!(
                "job role '{}' already exists",
                profile.name()
            )));
        }

        let role = JobRole::new(JobRoleId::new(self.next_id()), profile);
        job_roles.insert(role.id(), role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, role_id: JobRoleId) -> AppResult<Option<JobRole>> {
        Ok(self.job_roles.read().await.get(&role_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<JobRole>> {
        Ok(self
            .job_roles
            .read()
            .await
            .values()
            .find(|role| role.name() == name.trim())
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<JobRole>> {
        let roles = self.job_roles.read().await.values().cloned().collect();
        Ok(sorted_by_name(roles, JobRole::name))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryHrStore {
    async fn create(&self, profile: ProjectProfile) -> AppResult<Project> {
        let project = Project::new(ProjectId::new(self.next_id()), profile);
        self.projects
            .write()
            .await
            .insert(project.id(), project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        project_id: ProjectId,
        profile: ProjectProfile,
    ) -> AppResult<Option<Project>> {
        let mut projects = self.projects.write().await;
        let Some(stored) = projects.get_mut(&project_id) else {
            return Ok(None);
        };

        *stored = Project::new(project_id, profile);
        Ok(Some(stored.clone()))
    }

    async fn find_by_id(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.projects.read().await.get(&project_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Project>> {
        let projects = self.projects.read().await.values().cloned().collect();
        Ok(sorted_by_name(projects, Project::name))
    }

    async fn delete(&self, project_id: ProjectId) -> AppResult<bool> {
        let assignments = self.assignments.read().await;
        if assignments
            .keys()
            .any(|(_, linked_project_id)| *linked_project_id == project_id)
        {
            return Err(AppError::Conflict(format!(
                "project '{project_id}' still has assignments"
            )));
        }

        Ok(self.projects.write().await.remove(&project_id).is_some())
    }
}
