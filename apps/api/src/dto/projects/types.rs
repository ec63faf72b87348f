use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for creating or replacing a project.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/save-project-request.ts"
)]
pub struct SaveProjectRequest {
    pub name: String,
    pub description: Option<String>,
    #[ts(type = "string | null")]
    pub start_date: Option<NaiveDate>,
    #[ts(type = "string | null")]
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// API representation of a project.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/project-response.ts"
)]
pub struct ProjectResponse {
    #[ts(type = "number")]
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    #[ts(type = "string | null")]
    pub start_date: Option<NaiveDate>,
    #[ts(type = "string | null")]
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

/// One member of a project team.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/team-member-response.ts"
)]
pub struct TeamMemberResponse {
    #[ts(type = "number")]
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Displayed project role of one assigned employee.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/project-role-entry-response.ts"
)]
pub struct ProjectRoleEntryResponse {
    #[ts(type = "number")]
    pub employee_id: i64,
    pub role: String,
}
