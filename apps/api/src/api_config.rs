use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use talentsoft_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 3001;
const SESSION_SECRET_MIN_LENGTH: usize = 32;
const DEFAULT_BOOTSTRAP_ADMIN_NAME: &str = "Administrator";
const DEFAULT_BOOTSTRAP_ADMIN_NATIONAL_ID: &str = "ADMIN0001";

/// First administrator created on an empty database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdminConfig {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub cookie_secure: bool,
    pub bootstrap_admin: Option<BootstrapAdminConfig>,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_source(migrate_only, |name| env::var(name).ok())
    }

    fn from_source(
        migrate_only: bool,
        source: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let required = |name: &str| {
            source(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| AppError::Validation(format!("{name} is required")))
        };

        let database_url = required("DATABASE_URL")?;
        let session_secret = required("SESSION_SECRET")?;
        if session_secret.len() < SESSION_SECRET_MIN_LENGTH {
            return Err(AppError::Validation(format!(
                "SESSION_SECRET must be at least {SESSION_SECRET_MIN_LENGTH} characters"
            )));
        }

        let frontend_url =
            source("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_owned());
        let api_host = source("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_owned());
        let api_port = match source("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))?,
            None => DEFAULT_API_PORT,
        };
        let cookie_secure = source("SESSION_COOKIE_SECURE")
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));

        let bootstrap_admin = match (
            source("BOOTSTRAP_ADMIN_EMAIL").filter(|value| !value.trim().is_empty()),
            source("BOOTSTRAP_ADMIN_PASSWORD").filter(|value| !value.is_empty()),
        ) {
            (Some(email), Some(password)) => Some(BootstrapAdminConfig {
                name: source("BOOTSTRAP_ADMIN_NAME")
                    .unwrap_or_else(|| DEFAULT_BOOTSTRAP_ADMIN_NAME.to_owned()),
                national_id: source("BOOTSTRAP_ADMIN_NATIONAL_ID")
                    .unwrap_or_else(|| DEFAULT_BOOTSTRAP_ADMIN_NATIONAL_ID.to_owned()),
                email,
                password,
            }),
            (None, None) => None,
            _ => {
                return Err(AppError::Validation(
                    "BOOTSTRAP_ADMIN_EMAIL and BOOTSTRAP_ADMIN_PASSWORD must be set together"
                        .to_owned(),
                ));
            }
        };

        Ok(Self {
            migrate_only,
            database_url,
            frontend_url,
            api_host,
            api_port,
            cookie_secure,
            bootstrap_admin,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use talentsoft_core::AppError;

    use super::ApiConfig;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_source(false, |name| values.get(name).cloned())
    }

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn defaults_apply_when_optional_values_are_missing() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/talentsoft"),
            ("SESSION_SECRET", SECRET),
        ]);
        let Ok(config) = config else {
            panic!("config should load");
        };

        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert_eq!(
            config.socket_address().ok().map(|address| address.port()),
            Some(3001)
        );
        assert!(!config.cookie_secure);
        assert!(config.bootstrap_admin.is_none());
    }

    #[test]
    fn short_session_secret_is_rejected() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/talentsoft"),
            ("SESSION_SECRET", "too-short"),
        ]);

        assert!(matches!(config, Err(AppError::Validation(_))));
    }

    #[test]
    fn bootstrap_admin_requires_email_and_password_together() {
        let partial = load(&[
            ("DATABASE_URL", "postgres://localhost/talentsoft"),
            ("SESSION_SECRET", SECRET),
            ("BOOTSTRAP_ADMIN_EMAIL", "admin@talentsoft.example"),
        ]);
        assert!(matches!(partial, Err(AppError::Validation(_))));

        let complete = load(&[
            ("DATABASE_URL", "postgres://localhost/talentsoft"),
            ("SESSION_SECRET", SECRET),
            ("BOOTSTRAP_ADMIN_EMAIL", "admin@talentsoft.example"),
            ("BOOTSTRAP_ADMIN_PASSWORD", "correct-horse-battery"),
        ]);
        assert_eq!(
            complete
                .ok()
                .and_then(|config| config.bootstrap_admin)
                .map(|admin| admin.name),
            Some("Administrator".to_owned())
        );
    }

    #[test]
    fn invalid_port_is_a_validation_error() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/talentsoft"),
            ("SESSION_SECRET", SECRET),
            ("API_PORT", "not-a-port"),
        ]);

        assert!(matches!(config, Err(AppError::Validation(_))));
    }
}
