use std::sync::Arc;

use sqlx::PgPool;
use talentsoft_application::{
    AccessPolicyService, BootstrapService, CredentialRepository, CredentialService,
    EmployeeRepository, EmployeeService, JobRoleRepository, JobRoleService, PasswordHasher,
    ProjectAssignmentRepository, ProjectAssignmentService, ProjectRepository, ProjectService,
};
use talentsoft_infrastructure::{
    Argon2PasswordHasher, PostgresCredentialRepository, PostgresEmployeeRepository,
    PostgresJobRoleRepository, PostgresProjectAssignmentRepository, PostgresProjectRepository,
};

use crate::state::AppState;

/// Adapters behind every application port.
#[derive(Clone)]
pub struct HrPorts {
    pub employees: Arc<dyn EmployeeRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub job_roles: Arc<dyn JobRoleRepository>,
    pub assignments: Arc<dyn ProjectAssignmentRepository>,
    pub credentials: Arc<dyn CredentialRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
}

impl HrPorts {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            employees: Arc::new(PostgresEmployeeRepository::new(pool.clone())),
            projects: Arc::new(PostgresProjectRepository::new(pool.clone())),
            job_roles: Arc::new(PostgresJobRoleRepository::new(pool.clone())),
            assignments: Arc::new(PostgresProjectAssignmentRepository::new(pool.clone())),
            credentials: Arc::new(PostgresCredentialRepository::new(pool.clone())),
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
        }
    }
}

pub fn build_app_state(ports: HrPorts, frontend_url: String) -> AppState {
    let access_policy = AccessPolicyService::new(ports.assignments.clone());
    let job_role_service = JobRoleService::new(ports.job_roles.clone(), access_policy.clone());
    let credential_service = CredentialService::new(
        ports.employees.clone(),
        ports.job_roles.clone(),
        ports.credentials.clone(),
        ports.password_hasher,
        access_policy.clone(),
    );

    AppState {
        employee_service: EmployeeService::new(
            ports.employees.clone(),
            ports.job_roles,
            ports.assignments.clone(),
            ports.credentials,
            access_policy.clone(),
        ),
        project_service: ProjectService::new(
            ports.projects.clone(),
            ports.assignments.clone(),
            access_policy.clone(),
        ),
        assignment_service: ProjectAssignmentService::new(
            ports.employees.clone(),
            ports.projects,
            ports.assignments,
        ),
        bootstrap_service: BootstrapService::new(
            ports.employees,
            job_role_service.clone(),
            credential_service.clone(),
        ),
        job_role_service,
        credential_service,
        access_policy,
        frontend_url,
    }
}
