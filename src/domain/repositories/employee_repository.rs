use async_trait::async_trait;
use serde::Serialize;

use crate::domain::employee::{Employee, EmployeeUpdate};
use crate::domain::repositories::RepositoryError;

/// One row of the grouped average-salary report.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DepartmentAverage {
    pub department: String,
    pub avg_salary: f64,
}

/// Repository trait for employee records
///
/// Defines the contract for persisting and querying employees.
/// Implementations handle database-specific details.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee; fails with `Duplicate` when the
    /// `employee_id` is already taken.
    async fn insert(&self, employee: &Employee) -> Result<(), RepositoryError>;

    /// Page of employees ordered by joining date, newest first, with an
    /// optional exact department filter.
    async fn list(
        &self,
        department: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Employee>, RepositoryError>;

    /// Employees whose skills contain `skill`, compared
    /// case-insensitively as an exact element match.
    async fn search_by_skill(
        &self,
        skill: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Employee>, RepositoryError>;

    /// Find an employee by its business identifier.
    async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<Employee>, RepositoryError>;

    /// Apply only the supplied fields; fails with `NotFound` when the
    /// identifier does not exist. Returns the updated record.
    async fn update(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> Result<Employee, RepositoryError>;

    /// Delete by business identifier; fails with `NotFound` when absent.
    async fn delete(&self, employee_id: &str) -> Result<(), RepositoryError>;

    /// Mean salary per department, computed server-side over the whole
    /// collection.
    async fn average_salary_by_department(
        &self,
    ) -> Result<Vec<DepartmentAverage>, RepositoryError>;
}
