use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use talentsoft_core::{AppError, AppResult, EmployeeId, NonEmptyString};

use crate::{EmailAddress, JobRoleId, NationalId};

/// Employment status of an employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed. The only status allowed to sign in.
    #[default]
    Active,
    /// Former or suspended employee.
    Inactive,
}

impl EmployeeStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl Display for EmployeeStatus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for EmployeeStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(AppError::Validation(format!(
                "unknown employee status '{value}'"
            ))),
        }
    }
}

/// Postal address of an employee. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAddress {
    /// Street and number.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or province.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

impl EmployeeAddress {
    fn normalized(self) -> Self {
        Self {
            street: normalize_optional(self.street),
            city: normalize_optional(self.city),
            state: normalize_optional(self.state),
            postal_code: normalize_optional(self.postal_code),
        }
    }
}

/// Unvalidated employee attributes as received from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfileInput {
    /// Full name.
    pub name: String,
    /// National identity document number.
    pub national_id: String,
    /// Contact and sign-in email.
    pub email: String,
    /// Job role reference.
    pub role_id: JobRoleId,
    /// Monthly salary in cents.
    pub salary_cents: i64,
    /// Hire date.
    pub hire_date: Option<NaiveDate>,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Postal address.
    pub address: EmployeeAddress,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Stored avatar reference.
    pub avatar_path: Option<String>,
}

/// Validated employee attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    name: NonEmptyString,
    national_id: NationalId,
    email: EmailAddress,
    role_id: JobRoleId,
    salary_cents: i64,
    hire_date: Option<NaiveDate>,
    status: EmployeeStatus,
    address: EmployeeAddress,
    notes: Option<String>,
    avatar_path: Option<String>,
}

impl EmployeeProfile {
    /// Validates raw employee attributes.
    pub fn new(input: EmployeeProfileInput) -> AppResult<Self> {
        if input.salary_cents < 0 {
            return Err(AppError::Validation(
                "salary must not be negative".to_owned(),
            ));
        }

        Ok(Self {
            name: NonEmptyString::new(input.name)?,
            national_id: NationalId::new(input.national_id)?,
            email: EmailAddress::new(input.email)?,
            role_id: input.role_id,
            salary_cents: input.salary_cents,
            hire_date: input.hire_date,
            status: input.status,
            address: input.address.normalized(),
            notes: normalize_optional(input.notes),
            avatar_path: normalize_optional(input.avatar_path),
        })
    }

    /// Returns the full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the normalized national id.
    #[must_use]
    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the job role reference.
    #[must_use]
    pub fn role_id(&self) -> JobRoleId {
        self.role_id
    }

    /// Returns the monthly salary in cents.
    #[must_use]
    pub fn salary_cents(&self) -> i64 {
        self.salary_cents
    }

    /// Returns the hire date.
    #[must_use]
    pub fn hire_date(&self) -> Option<NaiveDate> {
        self.hire_date
    }

    /// Returns the employment status.
    #[must_use]
    pub fn status(&self) -> EmployeeStatus {
        self.status
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> &EmployeeAddress {
        &self.address
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the stored avatar reference.
    #[must_use]
    pub fn avatar_path(&self) -> Option<&str> {
        self.avatar_path.as_deref()
    }
}

/// Persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    profile: EmployeeProfile,
}

impl Employee {
    /// Creates an employee from a stored id and validated profile.
    #[must_use]
    pub fn new(id: EmployeeId, profile: EmployeeProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the employee identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the validated attributes.
    #[must_use]
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.profile.email().as_str()
    }

    /// Returns the job role reference.
    #[must_use]
    pub fn role_id(&self) -> JobRoleId {
        self.profile.role_id()
    }

    /// Returns whether the employee is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.profile.status() == EmployeeStatus::Active
    }
}

pub(crate) fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
