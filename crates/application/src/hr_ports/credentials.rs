use async_trait::async_trait;
use talentsoft_core::{AppResult, EmployeeId};

/// Repository port for employee sign-in credentials.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Stores or replaces the password hash of an employee.
    async fn save_password_hash(
        &self,
        employee_id: EmployeeId,
        password_hash: &str,
    ) -> AppResult<()>;

    /// Returns the stored password hash, if a credential exists.
    async fn find_password_hash(&self, employee_id: EmployeeId) -> AppResult<Option<String>>;

    /// Deletes the credential. Returns whether one existed.
    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool>;
}

/// Port for password hashing. Keeps domain/application free of direct
/// cryptographic library coupling.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password.
    fn hash_password(&self, password: &str) -> AppResult<String>;

    /// Verifies a plaintext password against a stored hash.
    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool>;
}
