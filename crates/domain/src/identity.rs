//! Contact and credential value types.
//!
//! Email and password rules follow the OWASP Authentication cheat sheet.

use serde::{Deserialize, Serialize};
use talentsoft_core::{AppError, AppResult};

/// Validated, lower-cased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > 254 {
            return Err(AppError::Validation(
                "email address must not exceed 254 characters".to_owned(),
            ));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// National identity document number with punctuation removed.
///
/// Accepts formatted input such as `123.456.789-09` and stores `12345678909`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId(String);

/// Maximum stored length of a national id.
pub const NATIONAL_ID_MAX_LENGTH: usize = 20;

impl NationalId {
    /// Creates a normalized national id.
    pub fn new(value: impl AsRef<str>) -> AppResult<Self> {
        let mut normalized = String::new();
        for character in value.as_ref().trim().chars() {
            match character {
                '.' | '-' | '/' | ' ' => {}
                _ if character.is_ascii_alphanumeric() => {
                    normalized.push(character.to_ascii_uppercase());
                }
                _ => {
                    return Err(AppError::Validation(format!(
                        "national id contains invalid character '{character}'"
                    )));
                }
            }
        }

        if normalized.is_empty() {
            return Err(AppError::Validation(
                "national id must not be empty".to_owned(),
            ));
        }

        if normalized.len() > NATIONAL_ID_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "national id must not exceed {NATIONAL_ID_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NationalId> for String {
    fn from(value: NationalId) -> Self {
        value.0
    }
}

/// Minimum password length (NIST SP800-63B, single factor).
pub const PASSWORD_MIN_LENGTH: usize = 10;

/// Maximum password length; bounds Argon2id work per request.
pub const PASSWORD_MAX_LENGTH: usize = 128;

/// Validates a plaintext password before it is hashed.
pub fn validate_password(password: &str) -> AppResult<()> {
    let char_count = password.chars().count();

    if char_count < PASSWORD_MIN_LENGTH {
        return Err(AppError::Validation(format!(
            "password must be at least {PASSWORD_MIN_LENGTH} characters"
        )));
    }

    if char_count > PASSWORD_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "password must not exceed {PASSWORD_MAX_LENGTH} characters"
        )));
    }

    if is_common_password(password) {
        return Err(AppError::Validation(
            "this password is too common and has appeared in data breaches".to_owned(),
        ));
    }

    Ok(())
}

fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|entry| *entry == lowered)
}

/// Breached passwords long enough to pass the length check.
static COMMON_PASSWORDS: &[&str] = &[
    "1234567890",
    "12345678910",
    "0123456789",
    "qwertyuiop",
    "password12",
    "password123",
    "password1234",
    "iloveyou123",
    "qwerty1234",
    "qwerty12345",
    "1q2w3e4r5t",
    "1qaz2wsx3edc",
    "abcdefghij",
    "welcome123",
    "changeme123",
    "talentsoft",
    "talentsoft123",
];
