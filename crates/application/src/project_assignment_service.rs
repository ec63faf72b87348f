//! Association manager for the employee/project many-to-many link.
//!
//! Write operations keep the boolean contract callers rely on: `Ok(false)`
//! means a referenced entity is missing, the pair is already linked or the
//! role was refused. Only store failures surface as `Err`.

use std::collections::BTreeMap;
use std::sync::Arc;

use talentsoft_core::{AppError, AppResult, EmployeeId};
use talentsoft_domain::{ProjectAssignment, ProjectId, ProjectRole};
use tracing::{debug, info, warn};

use crate::{
    EmployeeRepository, ProjectAssignmentRepository, ProjectDetails, ProjectRepository,
    TeamMember,
};

mod commands;
mod queries;

/// Application service for project assignments and project roles.
#[derive(Clone)]
pub struct ProjectAssignmentService {
    employee_repository: Arc<dyn EmployeeRepository>,
    project_repository: Arc<dyn ProjectRepository>,
    assignment_repository: Arc<dyn ProjectAssignmentRepository>,
}

impl ProjectAssignmentService {
    /// Creates a new project assignment service.
    #[must_use]
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        project_repository: Arc<dyn ProjectRepository>,
        assignment_repository: Arc<dyn ProjectAssignmentRepository>,
    ) -> Self {
        Self {
            employee_repository,
            project_repository,
            assignment_repository,
        }
    }

    async fn ensure_pair_exists(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<()> {
        if self
            .employee_repository
            .find_by_id(employee_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "employee '{employee_id}' does not exist"
            )));
        }

        if self
            .project_repository
            .find_by_id(project_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "project '{project_id}' does not exist"
            )));
        }

        Ok(())
    }
}

/// Converts expected rejections into `Ok(false)` and keeps store failures.
fn rejected_as_false(result: AppResult<()>, operation: &str) -> AppResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(
            AppError::NotFound(reason)
            | AppError::Conflict(reason)
            | AppError::Validation(reason),
        ) => {
            debug!(operation, %reason, "project assignment operation rejected");
            Ok(false)
        }
        Err(error) => Err(error),
    }
}
