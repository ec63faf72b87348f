//! TalentSoft API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod auth;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use talentsoft_application::BootstrapAdminInput;
use talentsoft_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::api_router::build_router;
use crate::api_services::{HrPorts, build_app_state, build_session_layer, connect_and_migrate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let pool = connect_and_migrate(&config.database_url).await?;

    if config.migrate_only {
        info!("database migrations applied successfully");
        return Ok(());
    }

    let session_layer = build_session_layer(pool.clone(), config.cookie_secure).await?;
    let app_state = build_app_state(HrPorts::postgres(&pool), config.frontend_url.clone());

    if let Some(admin) = config.bootstrap_admin.clone() {
        let created = app_state
            .bootstrap_service
            .bootstrap_admin(BootstrapAdminInput {
                name: admin.name,
                national_id: admin.national_id,
                email: admin.email,
                password: admin.password,
            })
            .await?;

        match created {
            Some(employee) => {
                info!(employee_id = %employee.id(), "bootstrap administrator created");
            }
            None => info!("employees already exist; bootstrap administrator skipped"),
        }
    }

    let app = build_router(app_state, &config.frontend_url, session_layer)?;
    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "talentsoft-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
