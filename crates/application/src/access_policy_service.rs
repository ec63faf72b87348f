use std::sync::Arc;

use talentsoft_core::{AppError, AppResult, EmployeeId, PermissionClass, UserIdentity};
use talentsoft_domain::ProjectId;

use crate::ProjectAssignmentRepository;

/// Application service answering who may see and change what.
///
/// Checks are point-in-time reads; nothing here holds locks across the
/// operation that follows.
#[derive(Clone)]
pub struct AccessPolicyService {
    assignment_repository: Arc<dyn ProjectAssignmentRepository>,
}

impl AccessPolicyService {
    /// Creates a new access policy service.
    #[must_use]
    pub fn new(assignment_repository: Arc<dyn ProjectAssignmentRepository>) -> Self {
        Self {
            assignment_repository,
        }
    }

    /// Returns whether the identity carries Admin or HR privileges.
    #[must_use]
    pub fn is_admin_or_hr(&self, identity: &UserIdentity) -> bool {
        identity.permission_class().is_admin_or_hr()
    }

    /// Returns whether the identity may view one project.
    ///
    /// Admin and HR always pass. Users pass only for projects they are
    /// assigned to.
    pub async fn can_access_project(
        &self,
        identity: &UserIdentity,
        project_id: ProjectId,
    ) -> AppResult<bool> {
        if self.is_admin_or_hr(identity) {
            return Ok(true);
        }

        let own_projects = self
            .assignment_repository
            .list_for_employee(identity.employee_id())
            .await?;

        Ok(own_projects
            .iter()
            .any(|assignment| assignment.project_id() == project_id))
    }

    /// Returns whether the identity may view one employee record.
    #[must_use]
    pub fn can_view_employee(&self, identity: &UserIdentity, employee_id: EmployeeId) -> bool {
        self.is_admin_or_hr(identity) || identity.employee_id() == employee_id
    }

    /// Ensures the identity carries Admin or HR privileges.
    pub fn require_admin_or_hr(&self, identity: &UserIdentity) -> AppResult<()> {
        if self.is_admin_or_hr(identity) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "employee '{}' requires admin or hr access",
            identity.employee_id()
        )))
    }

    /// Ensures the identity is an administrator.
    pub fn require_admin(&self, identity: &UserIdentity) -> AppResult<()> {
        if identity.permission_class() == PermissionClass::Admin {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "employee '{}' requires admin access",
            identity.employee_id()
        )))
    }

    /// Ensures the identity may view one project.
    pub async fn require_project_access(
        &self,
        identity: &UserIdentity,
        project_id: ProjectId,
    ) -> AppResult<()> {
        if self.can_access_project(identity, project_id).await? {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "employee '{}' cannot access project '{project_id}'",
            identity.employee_id()
        )))
    }

    /// Ensures the identity may view one employee record.
    pub fn require_employee_access(
        &self,
        identity: &UserIdentity,
        employee_id: EmployeeId,
    ) -> AppResult<()> {
        if self.can_view_employee(identity, employee_id) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "employee '{}' cannot access employee '{employee_id}'",
            identity.employee_id()
        )))
    }
}
