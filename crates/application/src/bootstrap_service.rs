//! First-run seeding of job roles and the initial administrator.

use std::sync::Arc;

use talentsoft_core::{AppError, AppResult, PermissionClass};
use talentsoft_domain::{
    Employee, EmployeeAddress, EmployeeProfile, EmployeeProfileInput, EmployeeStatus,
};
use tracing::info;

use crate::{CredentialService, EmployeeRepository, JobRoleService};

/// Initial administrator account details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdminInput {
    /// Display name.
    pub name: String,
    /// National id document number.
    pub national_id: String,
    /// Sign-in email.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Seeds an empty installation.
#[derive(Clone)]
pub struct BootstrapService {
    employee_repository: Arc<dyn EmployeeRepository>,
    job_role_service: JobRoleService,
    credential_service: CredentialService,
}

impl BootstrapService {
    /// Creates a new bootstrap service.
    #[must_use]
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        job_role_service: JobRoleService,
        credential_service: CredentialService,
    ) -> Self {
        Self {
            employee_repository,
            job_role_service,
            credential_service,
        }
    }

    /// Ensures system roles exist and creates the first administrator.
    ///
    /// Returns `None` without changes when any employee already exists.
    pub async fn bootstrap_admin(
        &self,
        input: BootstrapAdminInput,
    ) -> AppResult<Option<Employee>> {
        let roles = self.job_role_service.ensure_system_roles().await?;

        if !self.employee_repository.list().await?.is_empty() {
            return Ok(None);
        }

        let admin_role = roles
            .iter()
            .find(|role| role.permission_class() == PermissionClass::Admin)
            .ok_or_else(|| AppError::Internal("admin job role was not seeded".to_owned()))?;

        let profile = EmployeeProfile::new(EmployeeProfileInput {
            name: input.name,
            national_id: input.national_id,
            email: input.email,
            role_id: admin_role.id(),
            salary_cents: 0,
            hire_date: None,
            status: EmployeeStatus::Active,
            address: EmployeeAddress::default(),
            notes: None,
            avatar_path: None,
        })?;

        let admin = self.employee_repository.create(profile).await?;
        self.credential_service
            .set_password(admin.id(), &input.password)
            .await?;

        info!(employee_id = %admin.id(), "bootstrap administrator created");
        Ok(Some(admin))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use talentsoft_core::PermissionClass;

    use crate::test_fakes::{FakeHrStore, FakePasswordHasher};
    use crate::{
        AccessPolicyService, CredentialService, EmployeeRepository, JobRoleRepository,
        JobRoleService,
    };

    use super::{BootstrapAdminInput, BootstrapService};

    fn service(store: &Arc<FakeHrStore>) -> BootstrapService {
        let access_policy = AccessPolicyService::new(store.clone());
        BootstrapService::new(
            store.clone(),
            JobRoleService::new(store.clone(), access_policy.clone()),
            CredentialService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                Arc::new(FakePasswordHasher),
                access_policy,
            ),
        )
    }

    fn admin_input() -> BootstrapAdminInput {
        BootstrapAdminInput {
            name: "Root Admin".to_owned(),
            national_id: "000.000.001-91".to_owned(),
            email: "admin@talentsoft.example".to_owned(),
            password: "correct-horse-battery".to_owned(),
        }
    }

    #[tokio::test]
    async fn empty_store_gets_roles_and_admin() {
        let store = Arc::new(FakeHrStore::default());

        let created = service(&store).bootstrap_admin(admin_input()).await;
        let Ok(Some(admin)) = created else {
            panic!("admin should be created");
        };

        let roles = JobRoleRepository::list(store.as_ref())
            .await
            .unwrap_or_default();
        assert_eq!(roles.len(), 3);
        let admin_role = roles.iter().find(|role| role.id() == admin.role_id());
        assert_eq!(
            admin_role.map(|role| role.permission_class()),
            Some(PermissionClass::Admin)
        );
        assert!(store.has_credential(admin.id()).await);
    }

    #[tokio::test]
    async fn bootstrap_is_skipped_once_employees_exist() {
        let store = Arc::new(FakeHrStore::default());
        let service = service(&store);

        assert!(matches!(
            service.bootstrap_admin(admin_input()).await,
            Ok(Some(_))
        ));
        assert!(matches!(
            service.bootstrap_admin(admin_input()).await,
            Ok(None)
        ));
        assert_eq!(
            EmployeeRepository::list(store.as_ref())
                .await
                .unwrap_or_default()
                .len(),
            1
        );
    }
}
