//! Persistence ports for the HR entity store.
//!
//! Adapters return `Ok(None)` / `Ok(false)` for missing rows and reserve
//! `Err` for store failures and uniqueness conflicts.

mod assignments;
mod credentials;
mod employees;
mod job_roles;
mod projects;

pub use assignments::{ProjectAssignmentRepository, ProjectDetails, TeamMember};
pub use credentials::{CredentialRepository, PasswordHasher};
pub use employees::EmployeeRepository;
pub use job_roles::JobRoleRepository;
pub use projects::ProjectRepository;
