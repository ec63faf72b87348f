use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use talentsoft_core::{PermissionClass, UserIdentity};

use crate::dto::{CreateJobRoleRequest, JobRoleResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<JobRoleResponse>>> {
    let roles = state
        .job_role_service
        .list_roles()
        .await?
        .into_iter()
        .map(JobRoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<CreateJobRoleRequest>,
) -> ApiResult<(StatusCode, Json<JobRoleResponse>)> {
    let permission_class = payload.permission_class.parse::<PermissionClass>()?;
    let role = state
        .job_role_service
        .create_role(
            &user,
            payload.name.as_str(),
            payload.description,
            permission_class,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(JobRoleResponse::from(role))))
}
