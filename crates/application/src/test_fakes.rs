use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use talentsoft_core::{AppError, AppResult, EmployeeId, PermissionClass, UserIdentity};
use talentsoft_domain::{
    Employee, EmployeeAddress, EmployeeProfile, EmployeeProfileInput, EmployeeStatus, JobRole,
    JobRoleId, JobRoleProfile, Project, ProjectAssignment, ProjectId, ProjectProfile, ProjectRole,
};
use tokio::sync::Mutex;

use crate::{
    CredentialRepository, EmployeeRepository, JobRoleRepository, PasswordHasher,
    ProjectAssignmentRepository, ProjectRepository,
};

/// In-process entity store implementing every HR port.
#[derive(Default)]
pub(crate) struct FakeHrStore {
    next_id: AtomicI64,
    employees: Mutex<BTreeMap<EmployeeId, Employee>>,
    projects: Mutex<BTreeMap<ProjectId, Project>>,
    roles: Mutex<BTreeMap<JobRoleId, JobRole>>,
    assignments: Mutex<BTreeMap<(EmployeeId, ProjectId), ProjectAssignment>>,
    credentials: Mutex<HashMap<EmployeeId, String>>,
    fail_assignment_reads: AtomicBool,
}

impl FakeHrStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn fail_assignment_reads(&self) {
        self.fail_assignment_reads.store(true, Ordering::SeqCst);
    }

    fn check_assignment_reads(&self) -> AppResult<()> {
        if self.fail_assignment_reads.load(Ordering::SeqCst) {
            return Err(AppError::Internal("assignment store unavailable".to_owned()));
        }

        Ok(())
    }

    pub(crate) async fn assignment_count(&self) -> usize {
        self.assignments.lock().await.len()
    }

    pub(crate) async fn has_credential(&self, employee_id: EmployeeId) -> bool {
        self.credentials.lock().await.contains_key(&employee_id)
    }

    pub(crate) async fn seed_role(&self, name: &str, class: PermissionClass) -> JobRole {
        let profile = JobRoleProfile::new(name, None, class);
        assert!(profile.is_ok());
        let Ok(profile) = profile else {
            unreachable!();
        };
        let role = JobRoleRepository::create(self, profile).await;
        assert!(role.is_ok());
        let Ok(role) = role else {
            unreachable!();
        };
        role
    }

    pub(crate) async fn seed_employee(&self, name: &str, role_id: JobRoleId) -> Employee {
        let created = EmployeeRepository::create(self, employee_profile(name, role_id)).await;
        assert!(created.is_ok());
        let Ok(employee) = created else {
            unreachable!();
        };
        employee
    }

    pub(crate) async fn seed_project(&self, name: &str) -> Project {
        let profile = ProjectProfile::new(name, None, None, None, None);
        assert!(profile.is_ok());
        let Ok(profile) = profile else {
            unreachable!();
        };
        let created = ProjectRepository::create(self, profile).await;
        assert!(created.is_ok());
        let Ok(project) = created else {
            unreachable!();
        };
        project
    }

    /// Deletes a project row without touching its assignments.
    pub(crate) async fn orphan_project(&self, project_id: ProjectId) {
        self.projects.lock().await.remove(&project_id);
    }
}

pub(crate) fn employee_input(name: &str, role_id: JobRoleId) -> EmployeeProfileInput {
    let slug: String = name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase();
    let national_id: String = slug
        .bytes()
        .map(|byte| char::from(b'0' + byte % 10))
        .collect();

    EmployeeProfileInput {
        name: name.to_owned(),
        national_id,
        email: format!("{slug}@talentsoft.example"),
        role_id,
        salary_cents: 500_000,
        hire_date: NaiveDate::from_ymd_opt(2022, 1, 10),
        status: EmployeeStatus::Active,
        address: EmployeeAddress::default(),
        notes: None,
        avatar_path: None,
    }
}

pub(crate) fn employee_profile(name: &str, role_id: JobRoleId) -> EmployeeProfile {
    let profile = EmployeeProfile::new(employee_input(name, role_id));
    assert!(profile.is_ok());
    let Ok(profile) = profile else {
        unreachable!();
    };
    profile
}

pub(crate) fn identity_for(employee: &Employee, class: PermissionClass) -> UserIdentity {
    UserIdentity::new(employee.id(), employee.name(), employee.email(), class)
}

#[async_trait]
impl EmployeeRepository for FakeHrStore {
    async fn create(&self, profile: EmployeeProfile) -> AppResult<Employee> {
        let mut employees = self.employees.lock().await;
        if employees.values().any(|employee| {
            employee.profile().email() == profile.email()
                || employee.profile().national_id() == profile.national_id()
        }) {
            return Err(AppError::Conflict("employee already exists".to_owned()));
        }

        let employee = Employee::new(EmployeeId::new(self.next_id()), profile);
        employees.insert(employee.id(), employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        employee_id: EmployeeId,
        profile: EmployeeProfile,
    ) -> AppResult<Option<Employee>> {
        let mut employees = self.employees.lock().await;
        if !employees.contains_key(&employee_id) {
            return Ok(None);
        }

        let employee = Employee::new(employee_id, profile);
        employees.insert(employee_id, employee.clone());
        Ok(Some(employee))
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.employees.lock().await.get(&employee_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .employees
            .lock()
            .await
            .values()
            .find(|employee| employee.email() == email)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let mut listed: Vec<Employee> = self.employees.lock().await.values().cloned().collect();
        listed.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(listed)
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        Ok(self.employees.lock().await.remove(&employee_id).is_some())
    }
}

#[async_trait]
impl ProjectRepository for FakeHrStore {
    async fn create(&self, profile: ProjectProfile) -> AppResult<Project> {
        let project = Project::new(ProjectId::new(self.next_id()), profile);
        self.projects
            .lock()
            .await
            .insert(project.id(), project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        project_id: ProjectId,
        profile: ProjectProfile,
    ) -> AppResult<Option<Project>> {
        let mut projects = self.projects.lock().await;
        if !projects.contains_key(&project_id) {
            return Ok(None);
        }

        let project = Project::new(project_id, profile);
        projects.insert(project_id, project.clone());
        Ok(Some(project))
    }

    async fn find_by_id(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.projects.lock().await.get(&project_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Project>> {
        let mut listed: Vec<Project> = self.projects.lock().await.values().cloned().collect();
        listed.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(listed)
    }

    async fn delete(&self, project_id: ProjectId) -> AppResult<bool> {
        Ok(self.projects.lock().await.remove(&project_id).is_some())
    }
}

#[async_trait]
impl JobRoleRepository for FakeHrStore {
    async fn create(&self, profile: JobRoleProfile) -> AppResult<JobRole> {
        let mut roles = self.roles.lock().await;
        if roles
            .values()
            .any(|role| role.name() == profile.name().as_str())
        {
            return Err(AppError::Conflict(format!(
                "job role '{}' already exists",
                profile.name()
            )));
        }

        let role = JobRole::new(JobRoleId::new(self.next_id()), profile);
        roles.insert(role.id(), role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, role_id: JobRoleId) -> AppResult<Option<JobRole>> {
        Ok(self.roles.lock().await.get(&role_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<JobRole>> {
        Ok(self
            .roles
            .lock()
            .await
            .values()
            .find(|role| role.name() == name)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<JobRole>> {
        let mut listed: Vec<JobRole> = self.roles.lock().await.values().cloned().collect();
        listed.sort_by(|left, right| left.name().cmp(right.name()));
        Ok(listed)
    }
}

#[async_trait]
impl ProjectAssignmentRepository for FakeHrStore {
    async fn insert(&self, assignment: ProjectAssignment) -> AppResult<()> {
        let mut assignments = self.assignments.lock().await;
        let key = (assignment.employee_id(), assignment.project_id());
        if assignments.contains_key(&key) {
            return Err(AppError::Conflict("duplicate project assignment".to_owned()));
        }

        assignments.insert(key, assignment);
        Ok(())
    }

    async fn find(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectAssignment>> {
        self.check_assignment_reads()?;
        Ok(self
            .assignments
            .lock()
            .await
            .get(&(employee_id, project_id))
            .cloned())
    }

    async fn update_role(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: &ProjectRole,
    ) -> AppResult<bool> {
        Ok(self
            .assignments
            .lock()
            .await
            .get_mut(&(employee_id, project_id))
            .map(|assignment| assignment.set_role(role.clone()))
            .is_some())
    }

    async fn delete(&self, employee_id: EmployeeId, project_id: ProjectId) -> AppResult<bool> {
        Ok(self
            .assignments
            .lock()
            .await
            .remove(&(employee_id, project_id))
            .is_some())
    }

    async fn list_for_project(&self, project_id: ProjectId) -> AppResult<Vec<ProjectAssignment>> {
        self.check_assignment_reads()?;
        Ok(self
            .assignments
            .lock()
            .await
            .values()
            .filter(|assignment| assignment.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn list_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<ProjectAssignment>> {
        self.check_assignment_reads()?;
        Ok(self
            .assignments
            .lock()
            .await
            .values()
            .filter(|assignment| assignment.employee_id() == employee_id)
            .cloned()
            .collect())
    }

    async fn count_for_project(&self, project_id: ProjectId) -> AppResult<u64> {
        Ok(self.list_for_project(project_id).await?.len() as u64)
    }

    async fn delete_for_employee(&self, employee_id: EmployeeId) -> AppResult<u64> {
        let mut assignments = self.assignments.lock().await;
        let before = assignments.len();
        assignments.retain(|(stored_employee_id, _), _| *stored_employee_id != employee_id);
        Ok((before - assignments.len()) as u64)
    }

    async fn delete_for_project(&self, project_id: ProjectId) -> AppResult<u64> {
        let mut assignments = self.assignments.lock().await;
        let before = assignments.len();
        assignments.retain(|(_, stored_project_id), _| *stored_project_id != project_id);
        Ok((before - assignments.len()) as u64)
    }
}

#[async_trait]
impl CredentialRepository for FakeHrStore {
    async fn save_password_hash(
        &self,
        employee_id: EmployeeId,
        password_hash: &str,
    ) -> AppResult<()> {
        self.credentials
            .lock()
            .await
            .insert(employee_id, password_hash.to_owned());
        Ok(())
    }

    async fn find_password_hash(&self, employee_id: EmployeeId) -> AppResult<Option<String>> {
        Ok(self.credentials.lock().await.get(&employee_id).cloned())
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        Ok(self.credentials.lock().await.remove(&employee_id).is_some())
    }
}

/// Reversible hasher; keeps tests fast.
pub(crate) struct FakePasswordHasher;

impl PasswordHasher for FakePasswordHasher {
    fn hash_password(&self, password: &str) -> AppResult<String> {
        Ok(format!("hashed:{password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        Ok(hash == format!("hashed:{password}"))
    }
}
