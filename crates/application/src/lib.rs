//! Application services and ports.

#![forbid(unsafe_code)]

mod access_policy_service;
mod bootstrap_service;
mod credential_service;
mod employee_service;
mod hr_ports;
mod job_role_service;
mod project_assignment_service;
mod project_service;

#[cfg(test)]
mod test_fakes;

pub use access_policy_service::AccessPolicyService;
pub use bootstrap_service::{BootstrapAdminInput, BootstrapService};
pub use credential_service::CredentialService;
pub use employee_service::EmployeeService;
pub use hr_ports::{
    CredentialRepository, EmployeeRepository, JobRoleRepository, PasswordHasher,
    ProjectAssignmentRepository, ProjectDetails, ProjectRepository, TeamMember,
};
pub use job_role_service::JobRoleService;
pub use project_assignment_service::ProjectAssignmentService;
pub use project_service::{ProjectService, SaveProjectInput};
