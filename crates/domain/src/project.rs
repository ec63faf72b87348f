use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use talentsoft_core::{AppError, AppResult, NonEmptyString};

use crate::employee::normalize_optional;

/// Status assigned to projects created without one.
pub const DEFAULT_PROJECT_STATUS: &str = "Active";

/// Project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(i64);

impl ProjectId {
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

impl Display for ProjectId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Validated project attributes.
///
/// Status is free text ("Active", "Inactive", "Em andamento", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProfile {
    name: NonEmptyString,
    description: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    status: NonEmptyString,
}

impl ProjectProfile {
    /// Creates a validated project profile.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        status: Option<String>,
    ) -> AppResult<Self> {
        if let (Some(start), Some(end)) = (start_date, end_date)
            && end < start
        {
            return Err(AppError::Validation(format!(
                "project end date {end} is before start date {start}"
            )));
        }

        let status =
            normalize_optional(status).unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_owned());

        Ok(Self {
            name: NonEmptyString::new(name)?,
            description: normalize_optional(description),
            start_date,
            end_date,
            status: NonEmptyString::new(status)?,
        })
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the start date.
    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the free-form status.
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_str()
    }
}

/// Persisted project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    profile: ProjectProfile,
}

impl Project {
    /// Creates a project from a stored id and validated profile.
    #[must_use]
    pub fn new(id: ProjectId, profile: ProjectProfile) -> Self {
        Self { id, profile }
    }

    /// Returns the project identifier.
    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the validated attributes.
    #[must_use]
    pub fn profile(&self) -> &ProjectProfile {
        &self.profile
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name()
    }
}
