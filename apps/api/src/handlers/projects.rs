use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use talentsoft_core::UserIdentity;
use talentsoft_domain::ProjectId;

use crate::dto::{
    ProjectResponse, ProjectRoleEntryResponse, SaveProjectRequest, TeamMemberResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_projects_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let projects = state
        .project_service
        .list_projects(&user)
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(projects))
}

pub async fn create_project_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Json(payload): Json<SaveProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectResponse>)> {
    let project = state
        .project_service
        .create_project(&user, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

pub async fn get_project_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .project_service
        .get_project(&user, ProjectId::new(project_id))
        .await?;

    Ok(Json(ProjectResponse::from(project)))
}

pub async fn update_project_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(project_id): Path<i64>,
    Json(payload): Json<SaveProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .project_service
        .update_project(&user, ProjectId::new(project_id), payload.into())
        .await?;

    Ok(Json(ProjectResponse::from(project)))
}

pub async fn delete_project_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(project_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .project_service
        .delete_project(&user, ProjectId::new(project_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn project_team_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<TeamMemberResponse>>> {
    let project_id = ProjectId::new(project_id);
    state
        .access_policy
        .require_project_access(&user, project_id)
        .await?;

    let team = state
        .assignment_service
        .team_for_project(project_id)
        .await?
        .into_iter()
        .map(TeamMemberResponse::from)
        .collect();

    Ok(Json(team))
}

/// Role lookup for rendering; a failed read yields an empty list.
pub async fn project_roles_handler(
    State(state): State<AppState>,
    Extension(user): Extension<UserIdentity>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<ProjectRoleEntryResponse>>> {
    let project_id = ProjectId::new(project_id);
    state
        .access_policy
        .require_project_access(&user, project_id)
        .await?;

    let roles = state
        .assignment_service
        .roles_for_project_or_empty(project_id)
        .await
        .into_iter()
        .map(|(employee_id, role)| ProjectRoleEntryResponse {
            employee_id: employee_id.as_i64(),
            role,
        })
        .collect();

    Ok(Json(roles))
}
