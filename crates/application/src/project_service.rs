//! Project record management.

use std::sync::Arc;

use chrono::NaiveDate;
use talentsoft_core::{AppError, AppResult, UserIdentity};
use talentsoft_domain::{Project, ProjectId, ProjectProfile};
use tracing::info;

use crate::{AccessPolicyService, ProjectAssignmentRepository, ProjectRepository};

/// Input for creating or replacing a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveProjectInput {
    /// Project name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Start date.
    pub start_date: Option<NaiveDate>,
    /// End date.
    pub end_date: Option<NaiveDate>,
    /// Free-form status; defaults to "Active".
    pub status: Option<String>,
}

impl SaveProjectInput {
    fn into_profile(self) -> AppResult<ProjectProfile> {
        ProjectProfile::new(
            self.name,
            self.description,
            self.start_date,
            self.end_date,
            self.status,
        )
    }
}

/// Application service for projects.
#[derive(Clone)]
pub struct ProjectService {
    project_repository: Arc<dyn ProjectRepository>,
    assignment_repository: Arc<dyn ProjectAssignmentRepository>,
    access_policy: AccessPolicyService,
}

impl ProjectService {
    /// Creates a new project service.
    #[must_use]
    pub fn new(
        project_repository: Arc<dyn ProjectRepository>,
        assignment_repository: Arc<dyn ProjectAssignmentRepository>,
        access_policy: AccessPolicyService,
    ) -> Self {
        Self {
            project_repository,
            assignment_repository,
            access_policy,
        }
    }

    /// Creates a project. Admin or HR only.
    pub async fn create_project(
        &self,
        actor: &UserIdentity,
        input: SaveProjectInput,
    ) -> AppResult<Project> {
        self.access_policy.require_admin_or_hr(actor)?;

        let project = self
            .project_repository
            .create(input.into_profile()?)
            .await?;
        info!(
            actor = %actor.employee_id(),
            project_id = %project.id(),
            "project created"
        );

        Ok(project)
    }

    /// Replaces the attributes of a project. Admin or HR only.
    pub async fn update_project(
        &self,
        actor: &UserIdentity,
        project_id: ProjectId,
        input: SaveProjectInput,
    ) -> AppResult<Project> {
        self.access_policy.require_admin_or_hr(actor)?;

        let project = self
            .project_repository
            .update(project_id, input.into_profile()?)
            .await?
            .ok_or_else(|| project_not_found(project_id))?;
        info!(
            actor = %actor.employee_id(),
            project_id = %project_id,
            "project updated"
        );

        Ok(project)
    }

    /// Returns one project the actor may access.
    pub async fn get_project(
        &self,
        actor: &UserIdentity,
        project_id: ProjectId,
    ) -> AppResult<Project> {
        self.access_policy
            .require_project_access(actor, project_id)
            .await?;

        self.project_repository
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| project_not_found(project_id))
    }

    /// Lists every project for Admin/HR and the actor's own projects otherwise.
    pub async fn list_projects(&self, actor: &UserIdentity) -> AppResult<Vec<Project>> {
        if self.access_policy.is_admin_or_hr(actor) {
            return self.project_repository.list().await;
        }

        let assignments = self
            .assignment_repository
            .list_for_employee(actor.employee_id())
            .await?;

        let mut projects = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            if let Some(project) = self
                .project_repository
                .find_by_id(assignment.project_id())
                .await?
            {
                projects.push(project);
            }
        }

        projects.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(projects)
    }

    /// Deletes a project after removing its assignments. Admin or HR only.
    pub async fn delete_project(
        &self,
        actor: &UserIdentity,
        project_id: ProjectId,
    ) -> AppResult<()> {
        self.access_policy.require_admin_or_hr(actor)?;

        if self
            .project_repository
            .find_by_id(project_id)
            .await?
            .is_none()
        {
            return Err(project_not_found(project_id));
        }

        let removed_links = self
            .assignment_repository
            .delete_for_project(project_id)
            .await?;

        if !self.project_repository.delete(project_id).await? {
            return Err(project_not_found(project_id));
        }

        info!(
            actor = %actor.employee_id(),
            project_id = %project_id,
            removed_links,
            "project deleted"
        );

        Ok(())
    }
}

fn project_not_found(project_id: ProjectId) -> AppError {
    AppError::NotFound(format!("project '{project_id}' does not exist"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use talentsoft_core::{AppError, PermissionClass};

    use crate::test_fakes::{FakeHrStore, identity_for};
    use crate::{AccessPolicyService, ProjectAssignmentService};

    use super::{ProjectService, SaveProjectInput};

    fn service(store: &Arc<FakeHrStore>) -> ProjectService {
        ProjectService::new(
            store.clone(),
            store.clone(),
            AccessPolicyService::new(store.clone()),
        )
    }

    fn input(name: &str) -> SaveProjectInput {
        SaveProjectInput {
            name: name.to_owned(),
            description: Some("Internal platform".to_owned()),
            start_date: None,
            end_date: None,
            status: Some("Em andamento".to_owned()),
        }
    }

    #[tokio::test]
    async fn user_lists_only_own_projects() {
        let store = Arc::new(FakeHrStore::default());
        let role = store.seed_role("user", PermissionClass::User).await;
        let ana = store.seed_employee("Ana Souza", role.id()).await;
        let atlas = store.seed_project("Atlas").await;
        store.seed_project("Borealis").await;
        let assignments =
            ProjectAssignmentService::new(store.clone(), store.clone(), store.clone());
        assert_eq!(
            assignments.assign(ana.id(), atlas.id(), "Developer").await.ok(),
            Some(true)
        );

        let listed = service(&store)
            .list_projects(&identity_for(&ana, PermissionClass::User))
            .await
            .unwrap_or_default();
        assert_eq!(listed, vec![atlas.clone()]);

        let all = service(&store)
            .list_projects(&identity_for(&ana, PermissionClass::Hr))
            .await
            .unwrap_or_default();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn user_cannot_read_foreign_project() {
        let store = Arc::new(FakeHrStore::default());
        let role = store.seed_role("user", PermissionClass::User).await;
        let ana = store.seed_employee("Ana Souza", role.id()).await;
        let borealis = store.seed_project("Borealis").await;

        let result = service(&store)
            .get_project(&identity_for(&ana, PermissionClass::User), borealis.id())
            .await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn create_and_update_keep_free_form_status() {
        let store = Arc::new(FakeHrStore::default());
        let role = store.seed_role("hr", PermissionClass::Hr).await;
        let carla = store.seed_employee("Carla Dias", role.id()).await;
        let actor = identity_for(&carla, PermissionClass::Hr);
        let service = service(&store);

        let created = service.create_project(&actor, input("Atlas")).await;
        assert!(created.is_ok());
        let Ok(created) = created else {
            return;
        };
        assert_eq!(created.profile().status(), "Em andamento");

        let mut renamed = input("Atlas II");
        renamed.status = None;
        let updated = service.update_project(&actor, created.id(), renamed).await;
        assert_eq!(
            updated.ok().map(|project| project.profile().status().to_owned()),
            Some("Active".to_owned())
        );
    }

    #[tokio::test]
    async fn delete_removes_project_assignments() {
        let store = Arc::new(FakeHrStore::default());
        let role = store.seed_role("admin", PermissionClass::Admin).await;
        let carla = store.seed_employee("Carla Dias", role.id()).await;
        let atlas = store.seed_project("Atlas").await;
        let assignments =
            ProjectAssignmentService::new(store.clone(), store.clone(), store.clone());
        assert_eq!(
            assignments.assign(carla.id(), atlas.id(), "Lead").await.ok(),
            Some(true)
        );

        let actor = identity_for(&carla, PermissionClass::Admin);
        assert!(service(&store).delete_project(&actor, atlas.id()).await.is_ok());
        assert_eq!(store.assignment_count().await, 0);
        assert_eq!(
            assignments.is_assigned(carla.id(), atlas.id()).await.ok(),
            Some(false)
        );
        assert!(matches!(
            service(&store).delete_project(&actor, atlas.id()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
