use serde::{Deserialize, Serialize};
use talentsoft_core::UserIdentity;
use ts_rs::TS;

/// Incoming payload for email/password login.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/auth-login-request.ts"
)]
pub struct AuthLoginRequest {
    pub email: String,
    pub password: String,
}

/// Incoming payload for setting an employee password.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/set-password-request.ts"
)]
pub struct SetPasswordRequest {
    /// Required when employees change their own password.
    #[serde(default)]
    pub current_password: Option<String>,
    pub password: String,
}

/// API representation of the signed-in employee.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/user-identity-response.ts"
)]
pub struct UserIdentityResponse {
    #[ts(type = "number")]
    pub employee_id: i64,
    pub display_name: String,
    pub email: String,
    pub permission_class: String,
    pub is_admin_or_hr: bool,
}

impl From<UserIdentity> for UserIdentityResponse {
    fn from(identity: UserIdentity) -> Self {
        Self {
            employee_id: identity.employee_id().as_i64(),
            display_name: identity.display_name().to_owned(),
            email: identity.email().to_owned(),
            permission_class: identity.permission_class().as_str().to_owned(),
            is_admin_or_hr: identity.permission_class().is_admin_or_hr(),
        }
    }
}
