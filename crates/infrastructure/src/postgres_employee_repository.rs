//! PostgreSQL-backed employee repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use talentsoft_application::EmployeeRepository;
use talentsoft_core::{AppError, AppResult, EmployeeId};
use talentsoft_domain::{
    Employee, EmployeeAddress, EmployeeProfile, EmployeeProfileInput, EmployeeStatus, JobRoleId,
};

use crate::postgres_errors::{insert_error, query_error, write_error};

const EMPLOYEE_CONFLICT: &str = "an employee with this email or national id already exists";

/// PostgreSQL implementation of the employee repository port.
#[derive(Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    name: String,
    national_id: String,
    email: String,
    role_id: i64,
    salary_cents: i64,
    hire_date: Option<NaiveDate>,
    status: String,
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
    notes: Option<String>,
    avatar_path: Option<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = AppError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let profile = EmployeeProfile::new(EmployeeProfileInput {
            name: row.name,
            national_id: row.national_id,
            email: row.email,
            role_id: JobRoleId::new(row.role_id),
            salary_cents: row.salary_cents,
            hire_date: row.hire_date,
            status: row.status.parse::<EmployeeStatus>()?,
            address: EmployeeAddress {
                street: row.street,
                city: row.city,
                state: row.state,
                postal_code: row.postal_code,
            },
            notes: row.notes,
            avatar_path: row.avatar_path,
        })?;

        Ok(Employee::new(EmployeeId::new(row.id), profile))
    }
}

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, name, national_id, email, role_id, salary_cents, hire_date, status,
           street, city, state, postal_code, notes, avatar_path
    FROM employees
"#;

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, profile: EmployeeProfile) -> AppResult<Employee> {
        let address = profile.address();
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO employees (
                name, national_id, email, role_id, salary_cents, hire_date, status,
                street, city, state, postal_code, notes, avatar_path
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(profile.name())
        .bind(profile.national_id().as_str())
        .bind(profile.email().as_str())
        .bind(profile.role_id().as_i64())
        .bind(profile.salary_cents())
        .bind(profile.hire_date())
        .bind(profile.status().as_str())
        .bind(address.street.as_deref())
        .bind(address.city.as_deref())
        .bind(address.state.as_deref())
        .bind(address.postal_code.as_deref())
        .bind(profile.notes())
        .bind(profile.avatar_path())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| insert_error(error, "create employee", EMPLOYEE_CONFLICT))?;

        Ok(Employee::new(EmployeeId::new(id), profile))
    }

    async fn update(
        &self,
        employee_id: EmployeeId,
        profile: EmployeeProfile,
    ) -> AppResult<Option<Employee>> {
        let address = profile.address();
        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = $2,
                national_id = $3,
                email = $4,
                role_id = $5,
                salary_cents = $6,
                hire_date = $7,
                status = $8,
                street = $9,
                city = $10,
                state = $11,
                postal_code = $12,
                notes = $13,
                avatar_path = $14,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(employee_id.as_i64())
        .bind(profile.name())
        .bind(profile.national_id().as_str())
        .bind(profile.email().as_str())
        .bind(profile.role_id().as_i64())
        .bind(profile.salary_cents())
        .bind(profile.hire_date())
        .bind(profile.status().as_str())
        .bind(address.street.as_deref())
        .bind(address.city.as_deref())
        .bind(address.state.as_deref())
        .bind(address.postal_code.as_deref())
        .bind(profile.notes())
        .bind(profile.avatar_path())
        .execute(&self.pool)
        .await
        .map_err(|error| write_error(error, "update employee", EMPLOYEE_CONFLICT))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Employee::new(employee_id, profile)))
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!("{SELECT_EMPLOYEE} WHERE id = $1"))
            .bind(employee_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| query_error(error, "find employee"))?
            .map(Employee::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let query = format!("{SELECT_EMPLOYEE} WHERE email = LOWER(TRIM($1))");
        sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| query_error(error, "find employee by email"))?
            .map(Employee::try_from)
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!("{SELECT_EMPLOYEE} ORDER BY name, id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|error| query_error(error, "list employees"))?
            .into_iter()
            .map(Employee::try_from)
            .collect()
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(employee_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|error| write_error(error, "delete employee", EMPLOYEE_CONFLICT))?;

        Ok(result.rows_affected() > 0)
    }
}
