use async_trait::async_trait;
use talentsoft_core::AppResult;
use talentsoft_domain::{JobRole, JobRoleId, JobRoleProfile};

/// Repository port for job roles.
#[async_trait]
pub trait JobRoleRepository: Send + Sync {
    /// Creates a job role. Duplicate names are a conflict.
    async fn create(&self, profile: JobRoleProfile) -> AppResult<JobRole>;

    /// Finds a job role by id.
    async fn find_by_id(&self, role_id: JobRoleId) -> AppResult<Option<JobRole>>;

    /// Finds a job role by exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<JobRole>>;

    /// Lists job roles ordered by name.
    async fn list(&self) -> AppResult<Vec<JobRole>>;
}
