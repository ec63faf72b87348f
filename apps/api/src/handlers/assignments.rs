use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use talentsoft_core::{EmployeeId, UserIdentity};
use talentsoft_domain::ProjectId;

use crate::dto::{AssignEmployeeRequest, AssignmentResponse, UpdateProjectRoleRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn assign_employee_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(project_id): Path<i64>,
    Json(payload): Json<AssignEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<AssignmentResponse>)> {
    state.access_policy.require_admin_or_hr(&user)?;

    let assignment = state
        .assignment_service
        .try_assign(
            EmployeeId::new(payload.employee_id),
            ProjectId::new(project_id),
            payload.role.as_str(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(AssignmentResponse::from(assignment))))
}

pub async fn update_assignment_role_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path((project_id, employee_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateProjectRoleRequest>,
) -> ApiResult<Json<AssignmentResponse>> {
    state.access_policy.require_admin_or_hr(&user)?;

    let assignment = state
        .assignment_service
        .try_update_role(
            EmployeeId::new(employee_id),
            ProjectId::new(project_id),
            payload.role.as_str(),
        )
        .await?;

    Ok(Json(AssignmentResponse::from(assignment)))
}

/// Absent links are reported as removed.
pub async fn remove_assignment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path((project_id, employee_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    state.access_policy.require_admin_or_hr(&user)?;

    state
        .assignment_service
        .try_remove(EmployeeId::new(employee_id), ProjectId::new(project_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
