mod login;
mod session;

pub use login::login_handler;
pub use session::{logout_handler, me_handler};

/// Only the employee id is kept; the identity is rebuilt on every request.
pub const SESSION_EMPLOYEE_KEY: &str = "employee_id";
/// Unix timestamp of sign-in, checked against the absolute session lifetime.
pub const SESSION_CREATED_AT_KEY: &str = "session_created_at";
/// Sessions end this many seconds after sign-in regardless of activity.
pub const SESSION_ABSOLUTE_TIMEOUT_SECONDS: i64 = 8 * 60 * 60;
