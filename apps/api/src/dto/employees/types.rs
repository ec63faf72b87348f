use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for creating or replacing an employee.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/save-employee-request.ts"
)]
pub struct SaveEmployeeRequest {
    pub name: String,
    pub national_id: String,
    pub email: String,
    #[ts(type = "number")]
    pub role_id: i64,
    #[serde(default)]
    #[ts(type = "number")]
    pub salary_cents: i64,
    #[ts(type = "string | null")]
    pub hire_date: Option<NaiveDate>,
    /// `active` or `inactive`; defaults to `active`.
    pub status: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub avatar_path: Option<String>,
}

/// API representation of an employee.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/employee-response.ts"
)]
pub struct EmployeeResponse {
    #[ts(type = "number")]
    pub employee_id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    #[ts(type = "number")]
    pub role_id: i64,
    #[ts(type = "number")]
    pub salary_cents: i64,
    #[ts(type = "string | null")]
    pub hire_date: Option<NaiveDate>,
    pub status: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
    pub avatar_path: Option<String>,
}

/// One project of an employee with the employee's role and the team size.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/employee-project-response.ts"
)]
pub struct EmployeeProjectResponse {
    #[ts(type = "number")]
    pub project_id: i64,
    pub name: String,
    pub status: String,
    pub role: String,
    #[ts(type = "number")]
    pub team_size: u64,
}
