//! Argon2id adapter for the password hashing port.

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use talentsoft_application::PasswordHasher as PasswordHasherPort;
use talentsoft_core::{AppError, AppResult};

const MEMORY_COST_KIB: u32 = 19_456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

/// Argon2id hasher producing PHC-format strings.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Creates a hasher with m=19456 KiB, t=2, p=1.
    #[must_use]
    pub fn new() -> Self {
        let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)
            .unwrap_or_else(|_| Params::default());

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|error| AppError::Internal(format!("failed to hash password: {error}")))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|error| {
            AppError::Internal(format!("stored password hash is malformed: {error}"))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(error) => Err(AppError::Internal(format!(
                "failed to verify password: {error}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use talentsoft_application::PasswordHasher as PasswordHasherPort;
    use talentsoft_core::{AppError, AppResult};

    use super::Argon2PasswordHasher;

    #[test]
    fn stored_hash_is_argon2id_and_hides_the_password() -> AppResult<()> {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash_password("correct-horse-battery")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("correct-horse-battery"));
        assert!(hasher.verify_password("correct-horse-battery", &hash)?);
        assert!(!hasher.verify_password("wrong-horse-battery", &hash)?);
        Ok(())
    }

    #[test]
    fn same_password_gets_distinct_salts() -> AppResult<()> {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash_password("correct-horse-battery")?;
        let second = hasher.hash_password("correct-horse-battery")?;

        assert_ne!(first, second);
        Ok(())
    }

    #[test]
    fn malformed_hash_is_an_internal_error() {
        let hasher = Argon2PasswordHasher::new();

        assert!(matches!(
            hasher.verify_password("anything", "plain-text"),
            Err(AppError::Internal(_))
        ));
    }
}
