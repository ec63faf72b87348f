use serde::{Deserialize, Serialize};
use talentsoft_domain::JobRole;
use ts_rs::TS;

/// Incoming payload for job role creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-job-role-request.ts"
)]
pub struct CreateJobRoleRequest {
    pub name: String,
    pub description: Option<String>,
    /// One of `admin`, `hr` or `user`.
    pub permission_class: String,
}

/// API representation of a job role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/job-role-response.ts"
)]
pub struct JobRoleResponse {
    #[ts(type = "number")]
    pub role_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub permission_class: String,
}

impl From<JobRole> for JobRoleResponse {
    fn from(role: JobRole) -> Self {
        Self {
            role_id: role.id().as_i64(),
            name: role.name().to_owned(),
            description: role.description().map(str::to_owned),
            permission_class: role.permission_class().as_str().to_owned(),
        }
    }
}
