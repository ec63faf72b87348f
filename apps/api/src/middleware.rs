use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, header};
use axum::middleware::Next;
use axum::response::Response;
use talentsoft_core::{AppError, EmployeeId};
use tower_sessions::Session;

use crate::auth::{
    SESSION_ABSOLUTE_TIMEOUT_SECONDS, SESSION_CREATED_AT_KEY, SESSION_EMPLOYEE_KEY,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// Rebuilds the caller's identity from current employee and job role records.
pub async fn require_auth(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let employee_id = session
        .get::<EmployeeId>(SESSION_EMPLOYEE_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session employee: {error}")))?
        .ok_or_else(|| AppError::Unauthorized("authentication required".to_owned()))?;

    let created_at = session
        .get::<i64>(SESSION_CREATED_AT_KEY)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to read session creation time: {error}"))
        })?;

    if session_expired(created_at, chrono::Utc::now().timestamp()) {
        session
            .flush()
            .await
            .map_err(|error| AppError::Internal(format!("failed to flush session: {error}")))?;
        return Err(AppError::Unauthorized("session expired".to_owned()).into());
    }

    let Some(identity) = state.credential_service.resolve_identity(employee_id).await? else {
        session
            .flush()
            .await
            .map_err(|error| AppError::Internal(format!("failed to flush session: {error}")))?;
        return Err(AppError::Unauthorized("account is no longer active".to_owned()).into());
    };

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

pub async fn require_same_origin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    if is_state_changing_method(request.method()) {
        let headers = request.headers();

        if headers.get("sec-fetch-site") == Some(&HeaderValue::from_static("cross-site")) {
            return Err(AppError::Unauthorized("cross-site request blocked".to_owned()).into());
        }

        let origin = headers
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let referer = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if origin != state.frontend_url && !referer.starts_with(&state.frontend_url) {
            return Err(AppError::Unauthorized("origin validation failed".to_owned()).into());
        }
    }

    Ok(next.run(request).await)
}

fn session_expired(created_at: Option<i64>, now: i64) -> bool {
    match created_at {
        Some(created_at) => now - created_at > SESSION_ABSOLUTE_TIMEOUT_SECONDS,
        None => true,
    }
}

fn is_state_changing_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

#[cfg(test)]
mod tests {
    use axum::http::Method;

    use super::{SESSION_ABSOLUTE_TIMEOUT_SECONDS, is_state_changing_method, session_expired};

    #[test]
    fn sessions_without_creation_time_are_expired() {
        assert!(session_expired(None, 1_000));
    }

    #[test]
    fn sessions_expire_after_absolute_timeout() {
        let created_at = 1_000;
        assert!(!session_expired(
            Some(created_at),
            created_at + SESSION_ABSOLUTE_TIMEOUT_SECONDS
        ));
        assert!(session_expired(
            Some(created_at),
            created_at + SESSION_ABSOLUTE_TIMEOUT_SECONDS + 1
        ));
    }

    #[test]
    fn only_mutating_methods_need_origin_checks() {
        assert!(is_state_changing_method(&Method::DELETE));
        assert!(is_state_changing_method(&Method::PUT));
        assert!(!is_state_changing_method(&Method::GET));
        assert!(!is_state_changing_method(&Method::OPTIONS));
    }
}
