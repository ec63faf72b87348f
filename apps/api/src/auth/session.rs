use axum::Json;
use axum::extract::Extension;
use axum::http::StatusCode;
use talentsoft_core::{AppError, EmployeeId, UserIdentity};
use tower_sessions::Session;

use crate::dto::UserIdentityResponse;
use crate::error::ApiResult;

use super::SESSION_EMPLOYEE_KEY;

pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    let employee_id = session
        .get::<EmployeeId>(SESSION_EMPLOYEE_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session employee: {error}")))?;

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    if let Some(employee_id) = employee_id {
        tracing::info!(employee_id = %employee_id, "employee signed out");
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me_handler(
    Extension(identity): Extension<UserIdentity>,
) -> Json<UserIdentityResponse> {
    Json(UserIdentityResponse::from(identity))
}
