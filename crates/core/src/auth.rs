use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{AppError, EmployeeId};

/// Permission class granted through an employee's job role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionClass {
    /// Full administrative access.
    Admin,
    /// Human-resources staff.
    Hr,
    /// Regular employee.
    User,
}

impl PermissionClass {
    /// Returns a stable storage value for this permission class.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Hr => "hr",
            Self::User => "user",
        }
    }

    /// Returns all known permission classes.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PermissionClass] = &[
            PermissionClass::Admin,
            PermissionClass::Hr,
            PermissionClass::User,
        ];

        ALL
    }

    /// Returns whether this class carries administrative or HR privileges.
    #[must_use]
    pub fn is_admin_or_hr(&self) -> bool {
        matches!(self, Self::Admin | Self::Hr)
    }
}

impl Display for PermissionClass {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for PermissionClass {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "hr" => Ok(Self::Hr),
            "user" => Ok(Self::User),
            _ => Err(AppError::Validation(format!(
                "unknown permission class '{value}'"
            ))),
        }
    }
}

/// Authenticated actor persisted in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    employee_id: EmployeeId,
    display_name: String,
    email: String,
    permission_class: PermissionClass,
}

impl UserIdentity {
    /// Creates an identity for a signed-in employee.
    #[must_use]
    pub fn new(
        employee_id: EmployeeId,
        display_name: impl Into<String>,
        email: impl Into<String>,
        permission_class: PermissionClass,
    ) -> Self {
        Self {
            employee_id,
            display_name: display_name.into(),
            email: email.into(),
            permission_class,
        }
    }

    /// Returns the employee record backing this identity.
    #[must_use]
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the sign-in email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the permission class resolved at sign-in.
    #[must_use]
    pub fn permission_class(&self) -> PermissionClass {
        self.permission_class
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::PermissionClass;

    #[test]
    fn permission_class_roundtrip_storage_value() {
        for class in PermissionClass::all() {
            let restored = PermissionClass::from_str(class.as_str());
            assert_eq!(restored.ok(), Some(*class));
        }
    }

    #[test]
    fn permission_class_parsing_ignores_case_and_padding() {
        assert_eq!(
            PermissionClass::from_str(" HR ").ok(),
            Some(PermissionClass::Hr)
        );
    }

    #[test]
    fn unknown_permission_class_is_rejected() {
        assert!(PermissionClass::from_str("manager").is_err());
    }

    #[test]
    fn only_admin_and_hr_are_privileged() {
        assert!(PermissionClass::Admin.is_admin_or_hr());
        assert!(PermissionClass::Hr.is_admin_or_hr());
        assert!(!PermissionClass::User.is_admin_or_hr());
    }
}
