use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use talentsoft_core::{EmployeeId, UserIdentity};

use crate::dto::{
    EmployeeProjectResponse, EmployeeResponse, SaveEmployeeRequest, SetPasswordRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_employees_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<Vec<EmployeeResponse>>> {
    let employees = state
        .employee_service
        .list_employees(&user)
        .await?
        .into_iter()
        .map(EmployeeResponse::from)
        .collect();

    Ok(Json(employees))
}

pub async fn create_employee_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<SaveEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<EmployeeResponse>)> {
    let employee = state
        .employee_service
        .create_employee(&user, payload.into_input()?)
        .await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

pub async fn get_employee_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .get_employee(&user, EmployeeId::new(employee_id))
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn update_employee_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<SaveEmployeeRequest>,
) -> ApiResult<Json<EmployeeResponse>> {
    let employee = state
        .employee_service
        .update_employee(&user, EmployeeId::new(employee_id), payload.into_input()?)
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(employee_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .employee_service
        .delete_employee(&user, EmployeeId::new(employee_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/employees/{employee_id}/password - Admin/HR or the employee themself.
pub async fn set_employee_password_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<SetPasswordRequest>,
) -> ApiResult<StatusCode> {
    state
        .credential_service
        .change_password(
            &user,
            EmployeeId::new(employee_id),
            payload.current_password.as_deref(),
            &payload.password,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn employee_projects_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(employee_id): Path<i64>,
) -> ApiResult<Json<Vec<EmployeeProjectResponse>>> {
    let employee_id = EmployeeId::new(employee_id);
    state
        .access_policy
        .require_employee_access(&user, employee_id)?;

    let projects = state
        .assignment_service
        .projects_with_details_for_employee(employee_id)
        .await?
        .into_iter()
        .map(EmployeeProjectResponse::from)
        .collect();

    Ok(Json(projects))
}
