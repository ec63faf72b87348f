//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod argon2_password_hasher;
mod in_memory_hr_store;
mod postgres_credential_repository;
mod postgres_employee_repository;
mod postgres_errors;
mod postgres_job_role_repository;
mod postgres_project_assignment_repository;
mod postgres_project_repository;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use in_memory_hr_store::InMemoryHrStore;
pub use postgres_credential_repository::PostgresCredentialRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_job_role_repository::PostgresJobRoleRepository;
pub use postgres_project_assignment_repository::PostgresProjectAssignmentRepository;
pub use postgres_project_repository::PostgresProjectRepository;
