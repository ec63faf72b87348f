use super::*;

impl InMemoryHrStore {
    fn ensure_unique_identity(
        employees: &HashMap<EmployeeId, Employee>,
        profile: &EmployeeProfile,
        except: Option<EmployeeId>,
    ) -> AppResult<()> {
        let clash = employees.values().any(|employee| {
            Some(employee.id()) != except
                && (employee.profile().email() == profile.email()
                    || employee.profile().national_id() == profile.national_id())
        });

        if clash {
            return Err(AppError::Conflict(
                "an employee with this email or national id already exists".to_owned(),
            ));
        }

        Ok(())
    }

    async fn ensure_job_role_exists(&self, role_id: JobRoleId) -> AppResult<()> {
        if self.job_roles.read().await.contains_key(&role_id) {
            return Ok(());
        }

        Err(AppError::NotFound(format!(
            "job role '{role_id}' does not exist"
        )))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryHrStore {
    async fn create(&self, profile: EmployeeProfile) -> AppResult<Employee> {
        self.ensure_job_role_exists(profile.role_id()).await?;

        let mut employees = self.employees.write().await;
        Self::ensure_unique_identity(&employees, &profile, None)?;

        let employee = Employee::new(EmployeeId::new(self.next_id()), profile);
        employees.insert(employee.id(), employee.clone());
        Ok(employee)
    }

    async fn update(
        &self,
        employee_id: EmployeeId,
        profile: EmployeeProfile,
    ) -> AppResult<Option<Employee>> {
        self.ensure_job_role_exists(profile.role_id()).await?;

        let mut employees = self.employees.write().await;
        if !employees.contains_key(&employee_id) {
            return Ok(None);
        }
        Self::ensure_unique_identity(&employees, &profile, Some(employee_id))?;

        let employee = Employee::new(employee_id, profile);
        employees.insert(employee_id, employee.clone());
        Ok(Some(employee))
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.employees.read().await.get(&employee_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .employees
            .read()
            .await
            .values()
            .find(|employee| employee.email() == email)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let employees = self.employees.read().await.values().cloned().collect();
        Ok(sorted_by_name(employees, Employee::name))
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        let assignments = self.assignments.read().await;
        let has_links = assignments
            .keys()
            .any(|(linked_employee_id, _)| *linked_employee_id == employee_id);
        let has_credential = self.credentials.read().await.contains_key(&employee_id);
        if has_links || has_credential {
            return Err(AppError::Conflict(format!(
                "employee '{employee_id}' is still referenced"
            )));
        }

        Ok(self.employees.write().await.remove(&employee_id).is_some())
    }
}

#[async_trait]
impl CredentialRepository for InMemoryHrStore {
    async fn save_password_hash(
        &self,
        employee_id: EmployeeId,
        password_hash: &str,
    ) -> AppResult<()> {
        if !self.employees.read().await.contains_key(&employee_id) {
            return Err(AppError::NotFound(format!(
                "employee '{employee_id}' does not exist"
            )));
        }

        self.credentials
            .write()
            .await
            .insert(employee_id, password_hash.to_owned());
        Ok(())
    }

    async fn find_password_hash(&self, employee_id: EmployeeId) -> AppResult<Option<String>> {
        Ok(self.credentials.read().await.get(&employee_id).cloned())
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        Ok(self.credentials.write().await.remove(&employee_id).is_some())
    }
}
