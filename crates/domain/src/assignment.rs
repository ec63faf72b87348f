use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use talentsoft_core::{AppError, AppResult, EmployeeId};

use crate::ProjectId;

/// Label shown for assignments stored without a project role.
pub const PROJECT_ROLE_PLACEHOLDER: &str = "team member";

/// Maximum stored length of a project role.
pub const PROJECT_ROLE_MAX_LENGTH: usize = 120;

/// Free-text function an employee performs on one project.
///
/// Stored exactly as given and may be empty. The placeholder is applied by
/// [`ProjectRole::display`] at read time and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectRole(String);

impl ProjectRole {
    /// Wraps a role as given. Used for stored rows, which are never re-validated.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a role from caller input, refusing values longer than
    /// [`PROJECT_ROLE_MAX_LENGTH`] characters.
    pub fn bounded(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.chars().count() > PROJECT_ROLE_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "project role must not exceed {PROJECT_ROLE_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(value))
    }

    /// Returns the stored value, possibly empty.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns whether no role was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the role for display, substituting the placeholder when empty.
    #[must_use]
    pub fn display(&self) -> &str {
        if self.0.trim().is_empty() {
            PROJECT_ROLE_PLACEHOLDER
        } else {
            self.0.as_str()
        }
    }
}

/// Link between one employee and one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    employee_id: EmployeeId,
    project_id: ProjectId,
    role: ProjectRole,
    assigned_at: DateTime<Utc>,
}

impl ProjectAssignment {
    /// Creates an assignment record.
    #[must_use]
    pub fn new(
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: ProjectRole,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id,
            project_id,
            role,
            assigned_at,
        }
    }

    /// Returns the assigned employee.
    #[must_use]
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns the project.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the project role.
    #[must_use]
    pub fn role(&self) -> &ProjectRole {
        &self.role
    }

    /// Returns when the assignment was created.
    #[must_use]
    pub fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Replaces the project role.
    pub fn set_role(&mut self, role: ProjectRole) {
        self.role = role;
    }
}
