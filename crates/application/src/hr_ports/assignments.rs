use async_trait::async_trait;
use talentsoft_core::{AppResult, EmployeeId};
use talentsoft_domain::{Employee, Project, ProjectAssignment, ProjectId, ProjectRole};

/// Repository port for employee/project associations.
///
/// Implementations must enforce at most one row per (employee, project) pair
/// and report a second insert as `AppError::Conflict`.
#[async_trait]
pub trait ProjectAssignmentRepository: Send + Sync {
    /// Inserts a new association.
    async fn insert(&self, assignment: ProjectAssignment) -> AppResult<()>;

    /// Finds the association for a pair.
    async fn find(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectAssignment>>;

    /// Overwrites the project role. Returns whether a row was updated.
    async fn update_role(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &ProjectRole,
    ) -> AppResult<bool>;

    /// Deletes the association for a pair. Returns whether a row was deleted.
    async fn delete(&self, employee_id: EmployeeId, project_id: ProjectId) -> AppResult<bool>;

    /// Lists associations of one project ordered by employee id.
    async fn list_for_project(&self, project_id: ProjectId) -> AppResult<Vec<ProjectAssignment>>;

    /// Lists associations of one employee ordered by project id.
    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<ProjectAssignment>>;

    /// Counts employees assigned to one project.
    async fn count_for_project(&self, project_id: ProjectId) -> AppResult<u64>;

    /// Deletes every association of one employee. Returns the number deleted.
    async fn delete_for_employee(&self, employee_id: EmployeeId) -> AppResult<u64>;

    /// Deletes every association of one project. Returns the number deleted.
    async fn delete_for_project(&self, project_id: ProjectId) -> AppResult<u64>;
}

/// A project of one employee with that employee's role and the team size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    /// Project record.
    pub project: Project,
    /// Employee role on the project, placeholder applied.
    pub role: String,
    /// Number of employees assigned to the project.
    pub team_size: u64,
}

/// An employee on a project team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    /// Employee record.
    pub employee: Employee,
    /// Role on the project, placeholder applied.
    pub role: String,
}
