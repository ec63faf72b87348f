use async_trait::async_trait;
use talentsoft_core::AppResult;
use talentsoft_domain::{Project, ProjectId, ProjectProfile};

/// Repository port for projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Creates a project.
    async fn create(&self, profile: ProjectProfile) -> AppResult<Project>;

    /// Replaces the attributes of a project, if it exists.
    async fn update(
        &self,
        project_id: ProjectId,
        profile: ProjectProfile,
    ) -> AppResult<Option<Project>>;

    /// Finds a project by id.
    async fn find_by_id(&self, project_id: ProjectId) -> AppResult<Option<Project>>;

    /// Lists projects ordered by name.
    async fn list(&self) -> AppResult<Vec<Project>>;

    /// Deletes a project row. Returns whether it existed.
    async fn delete(&self, project_id: ProjectId) -> AppResult<bool>;
}
