use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use talentsoft_core::AppError;
use tower_http::trace::TraceLayer;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::PostgresStore;

use crate::state::AppState;
use crate::{auth, handlers, middleware};

mod cors;

use cors::build_cors_layer;

pub fn build_router(
    app_state: AppState,
    frontend_url: &str,
    session_layer: SessionManagerLayer<PostgresStore>,
) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route("/auth/me", get(auth::me_handler))
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/api/employees",
            get(handlers::employees::list_employees_handler)
                .post(handlers::employees::create_employee_handler),
        )
        .route(
            "/api/employees/{employee_id}",
            get(handlers::employees::get_employee_handler)
                .put(handlers::employees::update_employee_handler)
                .delete(handlers::employees::delete_employee_handler),
        )
        .route(
            "/api/employees/{employee_id}/password",
            put(handlers::employees::set_employee_password_handler),
        )
        .route(
            "/api/employees/{employee_id}/projects",
            get(handlers::employees::employee_projects_handler),
        )
        .route(
            "/api/projects",
            get(handlers::projects::list_projects_handler)
                .post(handlers::projects::create_project_handler),
        )
        .route(
            "/api/projects/{project_id}",
            get(handlers::projects::get_project_handler)
                .put(handlers::projects::update_project_handler)
                .delete(handlers::projects::delete_project_handler),
        )
        .route(
            "/api/projects/{project_id}/team",
            get(handlers::projects::project_team_handler),
        )
        .route(
            "/api/projects/{project_id}/roles",
            get(handlers::projects::project_roles_handler),
        )
        .route(
            "/api/projects/{project_id}/assignments",
            post(handlers::assignments::assign_employee_handler),
        )
        .route(
            "/api/projects/{project_id}/assignments/{employee_id}",
            put(handlers::assignments::update_assignment_role_handler)
                .delete(handlers::assignments::remove_assignment_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_auth,
        ));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        .merge(protected_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(frontend_url)?)
        .layer(session_layer)
        .with_state(app_state))
}
