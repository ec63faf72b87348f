use std::sync::Arc;

use talentsoft_core::{AppError, AppResult, PermissionClass, UserIdentity};
use talentsoft_domain::{JobRole, JobRoleProfile, system_role_profiles};
use tracing::info;

use crate::{AccessPolicyService, JobRoleRepository};

/// Application service for job roles and their permission classes.
#[derive(Clone)]
pub struct JobRoleService {
    repository: Arc<dyn JobRoleRepository>,
    access_policy: AccessPolicyService,
}

impl JobRoleService {
    /// Creates a new job role service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn JobRoleRepository>,
        access_policy: AccessPolicyService,
    ) -> Self {
        Self {
            repository,
            access_policy,
        }
    }

    /// Lists job roles ordered by name.
    pub async fn list_roles(&self) -> AppResult<Vec<JobRole>> {
        self.repository.list().await
    }

    /// Creates a job role. Admin only.
    pub async fn create_role(
        &self,
        actor: &UserIdentity,
        name: &str,
        description: Option<String>,
        permission_class: PermissionClass,
    ) -> AppResult<JobRole> {
        self.access_policy.require_admin(actor)?;

        let role = self
            .repository
            .create(JobRoleProfile::new(name, description, permission_class)?)
            .await?;
        info!(
            actor = %actor.employee_id(),
            role_id = %role.id(),
            permission_class = %role.permission_class(),
            "job role created"
        );

        Ok(role)
    }

    /// Seeds the `admin`, `hr` and `user` roles when they are missing.
    pub async fn ensure_system_roles(&self) -> AppResult<Vec<JobRole>> {
        let mut roles = Vec::new();
        for profile in system_role_profiles() {
            let name = profile.name().as_str().to_owned();
            if let Some(existing) = self.repository.find_by_name(&name).await? {
                roles.push(existing);
                continue;
            }

            match self.repository.create(profile).await {
                Ok(created) => {
                    info!(role = %name, "system job role seeded");
                    roles.push(created);
                }
                Err(AppError::Conflict(_)) => {
                    let existing =
                        self.repository
                            .find_by_name(&name)
                            .await?
                            .ok_or_else(|| {
                                AppError::Internal(format!(
                                    "system role '{name}' vanished after conflict"
                                ))
                            })?;
                    roles.push(existing);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(roles)
    }
}
