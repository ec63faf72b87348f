use axum::Json;
use axum::extract::State;
use talentsoft_core::AppError;
use tower_sessions::Session;
use tracing::info;

use crate::dto::{AuthLoginRequest, UserIdentityResponse};
use crate::error::ApiResult;
use crate::state::AppState;

use super::{SESSION_CREATED_AT_KEY, SESSION_EMPLOYEE_KEY};

/// POST /auth/login - Sign in with email and password.
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AuthLoginRequest>,
) -> ApiResult<Json<UserIdentityResponse>> {
    let identity = state
        .credential_service
        .authenticate(&payload.email, &payload.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("invalid email or password".to_owned()))?;

    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;

    session
        .insert(SESSION_EMPLOYEE_KEY, identity.employee_id())
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist session employee: {error}"))
        })?;

    session
        .insert(SESSION_CREATED_AT_KEY, chrono::Utc::now().timestamp())
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist session creation time: {error}"))
        })?;

    info!(employee_id = %identity.employee_id(), "employee signed in");

    Ok(Json(UserIdentityResponse::from(identity)))
}
