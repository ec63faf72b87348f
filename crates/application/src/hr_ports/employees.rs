use async_trait::async_trait;
use talentsoft_core::{AppResult, EmployeeId};
use talentsoft_domain::{Employee, EmployeeProfile};

/// Repository port for employee records.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Creates an employee. Duplicate email or national id is a conflict.
    async fn create(&self, profile: EmployeeProfile) -> AppResult<Employee>;

    /// Replaces the attributes of an employee, if it exists.
    async fn update(
        &self,
        employee_id: EmployeeId,
        profile: EmployeeProfile,
    ) -> AppResult<Option<Employee>>;

    /// Finds an employee by id.
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;

    /// Finds an employee by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Lists employees ordered by name.
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Deletes an employee row. Returns whether it existed.
    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool>;
}
