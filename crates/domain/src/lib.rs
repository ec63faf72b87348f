//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod assignment;
mod employee;
mod identity;
mod job_role;
mod project;

pub use assignment::{
    PROJECT_ROLE_MAX_LENGTH, PROJECT_ROLE_PLACEHOLDER, ProjectAssignment, ProjectRole,
};
pub use employee::{
    Employee, EmployeeAddress, EmployeeProfile, EmployeeProfileInput, EmployeeStatus,
};
pub use identity::{
    EmailAddress, NATIONAL_ID_MAX_LENGTH, NationalId, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH,
    validate_password,
};
pub use job_role::{JobRole, JobRoleId, JobRoleProfile, system_role_profiles};
pub use project::{DEFAULT_PROJECT_STATUS, Project, ProjectId, ProjectProfile};
pub use talentsoft_core::{EmployeeId, PermissionClass};
