//! Password credentials and sign-in.
//!
//! Sign-in failures are reported as `Ok(None)` without saying which check
//! failed, and a hash is computed on every path to keep response times flat.

use std::sync::Arc;

use talentsoft_core::{AppError, AppResult, EmployeeId, UserIdentity};
use talentsoft_domain::{EmailAddress, Employee, validate_password};
use tracing::{debug, info};

use crate::{
    AccessPolicyService, CredentialRepository, EmployeeRepository, JobRoleRepository,
    PasswordHasher,
};

/// Application service for employee credentials.
#[derive(Clone)]
pub struct CredentialService {
    employee_repository: Arc<dyn EmployeeRepository>,
    job_role_repository: Arc<dyn JobRoleRepository>,
    credential_repository: Arc<dyn CredentialRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    access_policy: AccessPolicyService,
}

impl CredentialService {
    /// Creates a new credential service.
    #[must_use]
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        job_role_repository: Arc<dyn JobRoleRepository>,
        credential_repository: Arc<dyn CredentialRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        access_policy: AccessPolicyService,
    ) -> Self {
        Self {
            employee_repository,
            job_role_repository,
            credential_repository,
            password_hasher,
            access_policy,
        }
    }

    /// Validates and stores a new password for an employee. Only the hash is kept.
    pub async fn set_password(&self, employee_id: EmployeeId, password: &str) -> AppResult<()> {
        validate_password(password)?;

        if self
            .employee_repository
            .find_by_id(employee_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "employee '{employee_id}' does not exist"
            )));
        }

        let password_hash = self.password_hasher.hash_password(password)?;
        self.credential_repository
            .save_password_hash(employee_id, &password_hash)
            .await?;

        info!(employee_id = %employee_id, "password updated");
        Ok(())
    }

    /// Sets a password on behalf of an actor. Admin, HR or the employee themself.
    ///
    /// Changing one's own password requires the current one. Admin and HR
    /// reset other employees' passwords without it.
    pub async fn change_password(
        &self,
        actor: &UserIdentity,
        employee_id: EmployeeId,
        current_password: Option<&str>,
        new_password: &str,
    ) -> AppResult<()> {
        self.access_policy
            .require_employee_access(actor, employee_id)?;

        if actor.employee_id() == employee_id {
            self.verify_current_password(employee_id, current_password)
                .await?;
        }

        self.set_password(employee_id, new_password).await
    }

    async fn verify_current_password(
        &self,
        employee_id: EmployeeId,
        current_password: Option<&str>,
    ) -> AppResult<()> {
        let current_password = current_password.ok_or_else(|| {
            AppError::Unauthorized("current password is required".to_owned())
        })?;

        let Some(stored_hash) = self
            .credential_repository
            .find_password_hash(employee_id)
            .await?
        else {
            let _ = self.password_hasher.hash_password(current_password);
            return Err(AppError::Unauthorized(
                "current password is incorrect".to_owned(),
            ));
        };

        if !self
            .password_hasher
            .verify_password(current_password, &stored_hash)?
        {
            debug!(
                employee_id = %employee_id,
                "password change rejected: wrong current password"
            );
            return Err(AppError::Unauthorized(
                "current password is incorrect".to_owned(),
            ));
        }

        Ok(())
    }

    /// Verifies an email/password pair and builds the session identity.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<UserIdentity>> {
        let Ok(email) = EmailAddress::new(email) else {
            let _ = self.password_hasher.hash_password(password);
            return Ok(None);
        };

        let Some(employee) = self
            .employee_repository
            .find_by_email(email.as_str())
            .await?
        else {
            let _ = self.password_hasher.hash_password(password);
            debug!("sign-in rejected: unknown email");
            return Ok(None);
        };

        let Some(stored_hash) = self
            .credential_repository
            .find_password_hash(employee.id())
            .await?
        else {
            let _ = self.password_hasher.hash_password(password);
            debug!(employee_id = %employee.id(), "sign-in rejected: no credential");
            return Ok(None);
        };

        if !self
            .password_hasher
            .verify_password(password, &stored_hash)?
        {
            debug!(employee_id = %employee.id(), "sign-in rejected: wrong password");
            return Ok(None);
        }

        if !employee.is_active() {
            debug!(employee_id = %employee.id(), "sign-in rejected: inactive employee");
            return Ok(None);
        }

        let identity = self.identity_for(&employee).await?;
        info!(employee_id = %employee.id(), "employee signed in");
        Ok(Some(identity))
    }

    /// Rebuilds the identity of a signed-in employee from current records.
    ///
    /// Returns `None` when the employee was deleted or is no longer active.
    /// The permission class always comes from the employee's current job role.
    pub async fn resolve_identity(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Option<UserIdentity>> {
        let Some(employee) = self.employee_repository.find_by_id(employee_id).await? else {
            debug!(employee_id = %employee_id, "session employee no longer exists");
            return Ok(None);
        };

        if !employee.is_active() {
            debug!(employee_id = %employee_id, "session employee is inactive");
            return Ok(None);
        }

        self.identity_for(&employee).await.map(Some)
    }

    async fn identity_for(&self, employee: &Employee) -> AppResult<UserIdentity> {
        let role = self
            .job_role_repository
            .find_by_id(employee.role_id())
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "employee '{}' references missing job role '{}'",
                    employee.id(),
                    employee.role_id()
                ))
            })?;

        Ok(UserIdentity::new(
            employee.id(),
            employee.name(),
            employee.email(),
            role.permission_class(),
        ))
    }
}
