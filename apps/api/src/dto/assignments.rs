use serde::{Deserialize, Serialize};
use talentsoft_domain::ProjectAssignment;
use ts_rs::TS;

/// Incoming payload for assigning an employee to a project.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/assign-employee-request.ts"
)]
pub struct AssignEmployeeRequest {
    #[ts(type = "number")]
    pub employee_id: i64,
    #[serde(default)]
    pub role: String,
}

/// Incoming payload for changing a project role.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/update-project-role-request.ts"
)]
pub struct UpdateProjectRoleRequest {
    #[serde(default)]
    pub role: String,
}

/// API representation of an employee/project link.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/assignment-response.ts"
)]
pub struct AssignmentResponse {
    #[ts(type = "number")]
    pub employee_id: i64,
    #[ts(type = "number")]
    pub project_id: i64,
    /// Stored role, possibly empty.
    pub role: String,
    /// Role with the placeholder applied.
    pub display_role: String,
    pub assigned_at: String,
}

impl From<ProjectAssignment> for AssignmentResponse {
    fn from(assignment: ProjectAssignment) -> Self {
        Self {
            employee_id: assignment.employee_id().as_i64(),
            project_id: assignment.project_id().as_i64(),
            role: assignment.role().as_str().to_owned(),
            display_role: assignment.role().display().to_owned(),
            assigned_at: assignment.assigned_at().to_rfc3339(),
        }
    }
}
