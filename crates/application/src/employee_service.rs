//! Employee record management.

use std::sync::Arc;

use talentsoft_core::{AppError, AppResult, EmployeeId, UserIdentity};
use talentsoft_domain::{Employee, EmployeeProfile, EmployeeProfileInput, JobRoleId};
use tracing::info;

use crate::{
    AccessPolicyService, CredentialRepository, EmployeeRepository, JobRoleRepository,
    ProjectAssignmentRepository,
};

/// Application service for employee records.
#[derive(Clone)]
pub struct EmployeeService {
    employee_repository: Arc<dyn EmployeeRepository>,
    job_role_repository: Arc<dyn JobRoleRepository>,
    assignment_repository: Arc<dyn ProjectAssignmentRepository>,
    credential_repository: Arc<dyn CredentialRepository>,
    access_policy: AccessPolicyService,
}

impl EmployeeService {
    /// Creates a new employee service.
    #[must_use]
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        job_role_repository: Arc<dyn JobRoleRepository>,
        assignment_repository: Arc<dyn ProjectAssignmentRepository>,
        credential_repository: Arc<dyn CredentialRepository>,
        access_policy: AccessPolicyService,
    ) -> Self {
        Self {
            employee_repository,
            job_role_repository,
            assignment_repository,
            credential_repository,
            access_policy,
        }
    }

    /// Creates an employee record. Admin or HR only.
    pub async fn create_employee(
        &self,
        actor: &UserIdentity,
        input: EmployeeProfileInput,
    ) -> AppResult<Employee> {
        self.access_policy.require_admin_or_hr(actor)?;

        let profile = EmployeeProfile::new(input)?;
        self.ensure_job_role_exists(profile.role_id()).await?;

        let employee = self.employee_repository.create(profile).await?;
        info!(
            actor = %actor.employee_id(),
            employee_id = %employee.id(),
            "employee created"
        );

        Ok(employee)
    }

    /// Replaces the attributes of an employee. Admin or HR only.
    pub async fn update_employee(
        &self,
        actor: &UserIdentity,
        employee_id: EmployeeId,
        input: EmployeeProfileInput,
    ) -> AppResult<Employee> {
        self.access_policy.require_admin_or_hr(actor)?;

        let profile = EmployeeProfile::new(input)?;
        self.ensure_job_role_exists(profile.role_id()).await?;

        let employee = self
            .employee_repository
            .update(employee_id, profile)
            .await?
            .ok_or_else(|| employee_not_found(employee_id))?;

        info!(
            actor = %actor.employee_id(),
            employee_id = %employee_id,
            "employee updated"
        );

        Ok(employee)
    }

    /// Returns one employee. Admin, HR or the employee themself.
    pub async fn get_employee(
        &self,
        actor: &UserIdentity,
        employee_id: EmployeeId,
    ) -> AppResult<Employee> {
        self.access_policy
            .require_employee_access(actor, employee_id)?;

        self.employee_repository
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| employee_not_found(employee_id))
    }

    /// Lists all employees ordered by name. Admin or HR only.
    pub async fn list_employees(&self, actor: &UserIdentity) -> AppResult<Vec<Employee>> {
        self.access_policy.require_admin_or_hr(actor)?;
        self.employee_repository.list().await
    }

    /// Deletes an employee together with their project links and credential.
    /// Admin or HR only.
    pub async fn delete_employee(
        &self,
        actor: &UserIdentity,
        employee_id: EmployeeId,
    ) -> AppResult<()> {
        self.access_policy.require_admin_or_hr(actor)?;

        if actor.employee_id() == employee_id {
            return Err(AppError::Validation(
                "employees cannot delete their own record".to_owned(),
            ));
        }

        if self
            .employee_repository
            .find_by_id(employee_id)
            .await?
            .is_none()
        {
            return Err(employee_not_found(employee_id));
        }

        let removed_links = self
            .assignment_repository
            .delete_for_employee(employee_id)
            .await?;
        self.credential_repository.delete(employee_id).await?;

        if !self.employee_repository.delete(employee_id).await? {
            return Err(employee_not_found(employee_id));
        }

        info!(
            actor = %actor.employee_id(),
            employee_id = %employee_id,
            removed_links,
            "employee deleted"
        );

        Ok(())
    }

    async fn ensure_job_role_exists(&self, role_id: JobRoleId) -> AppResult<()> {
        if self.job_role_repository.find_by_id(role_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "job role '{role_id}' does not exist"
            )));
        }

        Ok(())
    }
}

fn employee_not_found(employee_id: EmployeeId) -> AppError {
    AppError::NotFound(format!("employee '{employee_id}' does not exist"))
}
