use talentsoft_application::{
    AccessPolicyService, BootstrapService, CredentialService, EmployeeService, JobRoleService,
    ProjectAssignmentService, ProjectService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_policy: AccessPolicyService,
    pub employee_service: EmployeeService,
    pub project_service: ProjectService,
    pub job_role_service: JobRoleService,
    pub assignment_service: ProjectAssignmentService,
    pub credential_service: CredentialService,
    pub bootstrap_service: BootstrapService,
    pub frontend_url: String,
}
