use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use talentsoft_application::BootstrapAdminInput;
use talentsoft_core::{PermissionClass, UserIdentity};
use talentsoft_infrastructure::{Argon2PasswordHasher, InMemoryHrStore};

use crate::api_services::{HrPorts, build_app_state};
use crate::dto::{
    AssignEmployeeRequest, EmployeeResponse, ProjectResponse, SaveEmployeeRequest,
    SaveProjectRequest, SetPasswordRequest, UpdateProjectRoleRequest,
};
use crate::error::ApiResult;
use crate::state::AppState;

use super::{assignments, employees, projects, roles};

const ADMIN_EMAIL: &str = "admin@talentsoft.example";
const ADMIN_PASSWORD: &str = "correct-horse-battery";

fn status_of<T: IntoResponse>(result: ApiResult<T>) -> StatusCode {
    result.into_response().status()
}

async fn app_state_with_admin() -> (AppState, UserIdentity) {
    let store = Arc::new(InMemoryHrStore::new());
    let state = build_app_state(
        HrPorts {
            employees: store.clone(),
            projects: store.clone(),
            job_roles: store.clone(),
            assignments: store.clone(),
            credentials: store,
            password_hasher: Arc::new(Argon2PasswordHasher::new()),
        },
        "http://localhost:3000".to_owned(),
    );

    state
        .bootstrap_service
        .bootstrap_admin(BootstrapAdminInput {
            name: "Administrator".to_owned(),
            national_id: "ADMIN0001".to_owned(),
            email: ADMIN_EMAIL.to_owned(),
            password: ADMIN_PASSWORD.to_owned(),
        })
        .await
        .unwrap_or_else(|_| unreachable!());

    let admin = state
        .credential_service
        .authenticate(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap_or_else(|_| unreachable!())
        .unwrap_or_else(|| unreachable!());

    (state, admin)
}

async fn user_role_id(state: &AppState) -> i64 {
    let Json(roles) = roles::list_roles_handler(State(state.clone()))
        .await
        .unwrap_or_else(|_| unreachable!());

    roles
        .into_iter()
        .find(|role| role.permission_class == "user")
        .map(|role| role.role_id)
        .unwrap_or_else(|| unreachable!())
}

fn employee_request(name: &str, national_id: &str, role_id: i64) -> SaveEmployeeRequest {
    SaveEmployeeRequest {
        name: name.to_owned(),
        national_id: national_id.to_owned(),
        email: format!("{}@talentsoft.example", name.to_lowercase()),
        role_id,
        salary_cents: 540_000,
        hire_date: None,
        status: None,
        street: None,
        city: Some("Recife".to_owned()),
        state: None,
        postal_code: None,
        notes: None,
        avatar_path: None,
    }
}

async fn create_employee(state: &AppState, admin: &UserIdentity, name: &str, id: &str) -> i64 {
    let role_id = user_role_id(state).await;
    let (status, Json(employee)): (StatusCode, Json<EmployeeResponse>) =
        employees::create_employee_handler(
            State(state.clone()),
            Extension(admin.clone()),
            Json(employee_request(name, id, role_id)),
        )
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(status, StatusCode::CREATED);

    employee.employee_id
}

async fn create_project(state: &AppState, admin: &UserIdentity, name: &str) -> i64 {
    let (status, Json(project)): (StatusCode, Json<ProjectResponse>) =
        projects::create_project_handler(
            State(state.clone()),
            Extension(admin.clone()),
            Json(SaveProjectRequest {
                name: name.to_owned(),
                description: None,
                start_date: None,
                end_date: None,
                status: None,
            }),
        )
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(status, StatusCode::CREATED);

    project.project_id
}

async fn assign(
    state: &AppState,
    actor: &UserIdentity,
    project_id: i64,
    employee_id: i64,
    role: &str,
) -> StatusCode {
    status_of(
        assignments::assign_employee_handler(
            State(state.clone()),
            Extension(actor.clone()),
            Path(project_id),
            Json(AssignEmployeeRequest {
                employee_id,
                role: role.to_owned(),
            }),
        )
        .await,
    )
}

#[tokio::test]
async fn assignment_endpoints_report_created_conflict_and_not_found() {
    let (state, admin) = app_state_with_admin().await;
    let employee_id = create_employee(&state, &admin, "Bruna", "11122233344").await;
    let project_id = create_project(&state, &admin, "Payroll").await;

    assert_eq!(
        assign(&state, &admin, project_id, employee_id, "Analyst").await,
        StatusCode::CREATED
    );
    assert_eq!(
        assign(&state, &admin, project_id, employee_id, "Lead").await,
        StatusCode::CONFLICT
    );
    assert_eq!(
        assign(&state, &admin, 99_999, employee_id, "Lead").await,
        StatusCode::NOT_FOUND
    );

    let Json(roles) = projects::project_roles_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path(project_id),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].employee_id, employee_id);
    assert_eq!(roles[0].role, "Analyst");

    let Json(team) = projects::project_team_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path(project_id),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].role, "Analyst");
}

#[tokio::test]
async fn role_updates_and_removal_follow_the_link() {
    let (state, admin) = app_state_with_admin().await;
    let employee_id = create_employee(&state, &admin, "Davi", "55566677788").await;
    let project_id = create_project(&state, &admin, "Onboarding").await;

    let not_linked = assignments::update_assignment_role_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path((project_id, employee_id)),
        Json(UpdateProjectRoleRequest {
            role: "Lead".to_owned(),
        }),
    )
    .await;
    assert_eq!(status_of(not_linked), StatusCode::NOT_FOUND);

    assert_eq!(
        assign(&state, &admin, project_id, employee_id, "").await,
        StatusCode::CREATED
    );

    let Json(updated) = assignments::update_assignment_role_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path((project_id, employee_id)),
        Json(UpdateProjectRoleRequest {
            role: String::new(),
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(updated.role, "");
    assert_ne!(updated.display_role, "");

    let removed = assignments::remove_assignment_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path((project_id, employee_id)),
    )
    .await;
    assert_eq!(status_of(removed), StatusCode::NO_CONTENT);

    let Json(projects) = employees::employee_projects_handler(
        State(state.clone()),
        Extension(admin),
        Path(employee_id),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert!(projects.is_empty());
}

#[tokio::test]
async fn regular_users_only_reach_their_own_projects() {
    let (state, admin) = app_state_with_admin().await;
    let employee_id = create_employee(&state, &admin, "Elisa", "99988877766").await;
    let own_project = create_project(&state, &admin, "Benefits").await;
    let other_project = create_project(&state, &admin, "Audit").await;
    assert_eq!(
        assign(&state, &admin, own_project, employee_id, "Tester").await,
        StatusCode::CREATED
    );

    let user = UserIdentity::new(
        talentsoft_core::EmployeeId::new(employee_id),
        "Elisa",
        "elisa@talentsoft.example",
        PermissionClass::User,
    );

    let own_team = projects::project_team_handler(
        State(state.clone()),
        Extension(user.clone()),
        Path(own_project),
    )
    .await;
    assert_eq!(status_of(own_team), StatusCode::OK);

    let other_team = projects::project_team_handler(
        State(state.clone()),
        Extension(user.clone()),
        Path(other_project),
    )
    .await;
    assert_eq!(status_of(other_team), StatusCode::FORBIDDEN);

    assert_eq!(
        assign(&state, &user, other_project, employee_id, "Tester").await,
        StatusCode::FORBIDDEN
    );

    let Json(visible) =
        projects::list_projects_handler(State(state.clone()), Extension(user.clone()))
            .await
            .unwrap_or_else(|_| unreachable!());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].project_id, own_project);

    let Json(own_projects) = employees::employee_projects_handler(
        State(state),
        Extension(user),
        Path(employee_id),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(own_projects.len(), 1);
    assert_eq!(own_projects[0].role, "Tester");
    assert_eq!(own_projects[0].team_size, 1);
}

#[tokio::test]
async fn unknown_employee_status_is_a_bad_request() {
    let (state, admin) = app_state_with_admin().await;
    let role_id = user_role_id(&state).await;
    let mut request = employee_request("Fabio", "12312312312", role_id);
    request.status = Some("retired".to_owned());

    let result =
        employees::create_employee_handler(State(state), Extension(admin), Json(request)).await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn own_password_change_checks_the_current_password() {
    let (state, admin) = app_state_with_admin().await;
    let set_password = |current_password: Option<&str>, password: &str| {
        employees::set_employee_password_handler(
            State(state.clone()),
            Extension(admin.clone()),
            Path(admin.employee_id().as_i64()),
            Json(SetPasswordRequest {
                current_password: current_password.map(str::to_owned),
                password: password.to_owned(),
            }),
        )
    };

    assert_eq!(
        status_of(set_password(Some("wrong-old-password"), "replacement-pass-1").await),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        status_of(set_password(Some(ADMIN_PASSWORD), "replacement-pass-1").await),
        StatusCode::NO_CONTENT
    );
}

#[tokio::test]
async fn resolved_identity_drops_admin_rights_after_demotion() {
    let (state, admin) = app_state_with_admin().await;
    let employee_id = create_employee(&state, &admin, "Gil", "44455566677").await;
    let role_id = user_role_id(&state).await;

    let Json(roles) = roles::list_roles_handler(State(state.clone()))
        .await
        .unwrap_or_else(|_| unreachable!());
    let hr_role_id = roles
        .iter()
        .find(|role| role.permission_class == "hr")
        .map(|role| role.role_id)
        .unwrap_or_else(|| unreachable!());

    let promote = employees::update_employee_handler(
        State(state.clone()),
        Extension(admin.clone()),
        Path(employee_id),
        Json(employee_request("Gil", "44455566677", hr_role_id)),
    )
    .await;
    assert_eq!(status_of(promote), StatusCode::OK);

    let gil = talentsoft_core::EmployeeId::new(employee_id);
    let hr_identity = state
        .credential_service
        .resolve_identity(gil)
        .await
        .unwrap_or_else(|_| unreachable!())
        .unwrap_or_else(|| unreachable!());
    assert_eq!(hr_identity.permission_class(), PermissionClass::Hr);

    let demote = employees::update_employee_handler(
        State(state.clone()),
        Extension(admin),
        Path(employee_id),
        Json(employee_request("Gil", "44455566677", role_id)),
    )
    .await;
    assert_eq!(status_of(demote), StatusCode::OK);

    let demoted = state
        .credential_service
        .resolve_identity(gil)
        .await
        .unwrap_or_else(|_| unreachable!())
        .unwrap_or_else(|| unreachable!());
    assert_eq!(
        status_of(
            employees::list_employees_handler(State(state.clone()), Extension(demoted)).await
        ),
        StatusCode::FORBIDDEN
    );
}
