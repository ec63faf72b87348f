//! In-memory HR entity store.
//!
//! Mirrors the PostgreSQL schema rules: unique role names, unique employee
//! email and national id, one link per (employee, project) pair, and
//! restrict-on-delete for referenced rows.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use talentsoft_application::{
    CredentialRepository, EmployeeRepository, JobRoleRepository, ProjectAssignmentRepository,
    ProjectRepository,
};
use talentsoft_core::{AppError, AppResult, EmployeeId};
use talentsoft_domain::{
    Employee, EmployeeProfile, JobRole, JobRoleId, JobRoleProfile, Project, ProjectAssignment,
    ProjectId, ProjectProfile, ProjectRole,
};
use tokio::sync::RwLock;

/// In-memory implementation of every HR repository port.
#[derive(Debug, Default)]
pub struct InMemoryHrStore {
    sequence: AtomicI64,
    job_roles: RwLock<HashMap<JobRoleId, JobRole>>,
    employees: RwLock<HashMap<EmployeeId, Employee>>,
    projects: RwLock<HashMap<ProjectId, Project>>,
    assignments: RwLock<HashMap<(EmployeeId, ProjectId), ProjectAssignment>>,
    credentials: RwLock<HashMap<EmployeeId, String>>,
}

impl InMemoryHrStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn sorted_by_name<T>(mut values: Vec<T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    values.sort_by(|left, right| name(left).cmp(name(right)));
    values
}

mod assignments;
mod catalog;
mod people;
