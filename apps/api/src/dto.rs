mod assignments;
mod auth;
mod common;
mod employees;
mod projects;
mod roles;

pub use assignments::{AssignEmployeeRequest, AssignmentResponse, UpdateProjectRoleRequest};
pub use auth::{AuthLoginRequest, SetPasswordRequest, UserIdentityResponse};
pub use common::HealthResponse;
pub use employees::{EmployeeProjectResponse, EmployeeResponse, SaveEmployeeRequest};
pub use projects::{
    ProjectResponse, ProjectRoleEntryResponse, SaveProjectRequest, TeamMemberResponse,
};
pub use roles::{CreateJobRoleRequest, JobRoleResponse};
