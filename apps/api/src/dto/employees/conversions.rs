use talentsoft_application::ProjectDetails;
use talentsoft_core::AppResult;
use talentsoft_domain::{
    Employee, EmployeeAddress, EmployeeProfileInput, EmployeeStatus, JobRoleId,
};

use super::types::{EmployeeProjectResponse, EmployeeResponse, SaveEmployeeRequest};

impl SaveEmployeeRequest {
    pub fn into_input(self) -> AppResult<EmployeeProfileInput> {
        let status = match self.status.as_deref() {
            Some(value) => value.parse::<EmployeeStatus>()?,
            None => EmployeeStatus::default(),
        };

        Ok(EmployeeProfileInput {
            name: self.name,
            national_id: self.national_id,
            email: self.email,
            role_id: JobRoleId::new(self.role_id),
            salary_cents: self.salary_cents,
            hire_date: self.hire_date,
            status,
            address: EmployeeAddress {
                street: self.street,
                city: self.city,
                state: self.state,
                postal_code: self.postal_code,
            },
            notes: self.notes,
            avatar_path: self.avatar_path,
        })
    }
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        let profile = employee.profile();
        let address = profile.address().clone();

        Self {
            employee_id: employee.id().as_i64(),
            name: profile.name().to_owned(),
            national_id: profile.national_id().as_str().to_owned(),
            email: profile.email().as_str().to_owned(),
            role_id: profile.role_id().as_i64(),
            salary_cents: profile.salary_cents(),
            hire_date: profile.hire_date(),
            status: profile.status().as_str().to_owned(),
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            notes: profile.notes().map(str::to_owned),
            avatar_path: profile.avatar_path().map(str::to_owned),
        }
    }
}

impl From<ProjectDetails> for EmployeeProjectResponse {
    fn from(details: ProjectDetails) -> Self {
        Self {
            project_id: details.project.id().as_i64(),
            name: details.project.name().to_owned(),
            status: details.project.profile().status().to_owned(),
            role: details.role,
            team_size: details.team_size,
        }
    }
}
