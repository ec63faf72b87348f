use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use talentsoft_core::{AppResult, NonEmptyString, PermissionClass};

/// Job role identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRoleId(i64);

impl JobRoleId {
    /// Wraps a stored identifier value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying identifier value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for JobRoleId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated attributes of a job role before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRoleProfile {
    name: NonEmptyString,
    description: Option<String>,
    permission_class: PermissionClass,
}

impl JobRoleProfile {
    /// Creates a validated job role profile.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        permission_class: PermissionClass,
    ) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            description: description
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty()),
            permission_class,
        })
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the permission class granted to holders of this role.
    #[must_use]
    pub fn permission_class(&self) -> PermissionClass {
        self.permission_class
    }
}

/// Job title held by an employee. Its permission class drives authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRole {
    id: JobRoleId,
    profile: JobRoleProfile,
}

impl JobRole {
    /// Creates a persisted job role.
    #[must_use]
    pub fn new(id: JobRoleId, profile: JobRoleProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> JobRoleId {
        self.id
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name().as_str()
    }

    /// Returns the optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.profile.description()
    }

    /// Returns the permission class granted to holders of this role.
    #[must_use]
    pub fn permission_class(&self) -> PermissionClass {
        self.profile.permission_class()
    }
}

/// Seeded roles whose names match their permission class.
#[must_use]
pub fn system_role_profiles() -> Vec<JobRoleProfile> {
    PermissionClass::all()
        .iter()
        .filter_map(|class| {
            JobRoleProfile::new(
                class.as_str(),
                Some(system_role_description(*class).to_owned()),
                *class,
            )
            .ok()
        })
        .collect()
}

fn system_role_description(class: PermissionClass) -> &'static str {
    match class {
        PermissionClass::Admin => "System administrator",
        PermissionClass::Hr => "Human resources",
        PermissionClass::User => "Employee",
    }
}

#[cfg(test)]
mod tests {
    use talentsoft_core::PermissionClass;

    use super::{JobRoleProfile, system_role_profiles};

    #[test]
    fn blank_description_is_dropped() {
        let profile =
            JobRoleProfile::new("Developer", Some("   ".to_owned()), PermissionClass::User);
        assert_eq!(
            profile
                .ok()
                .and_then(|value| value.description().map(str::to_owned)),
            None
        );
    }

    #[test]
    fn system_roles_cover_every_permission_class() {
        let profiles = system_role_profiles();
        assert_eq!(profiles.len(), PermissionClass::all().len());
        for profile in profiles {
            assert_eq!(profile.name().as_str(), profile.permission_class().as_str());
        }
    }
}
