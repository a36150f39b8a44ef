use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::employee::{Employee, EmployeeUpdate};
use crate::domain::repositories::{DepartmentAverage, EmployeeRepository, RepositoryError};

const EMPLOYEE_COLUMNS: &str = "id, employee_id, name, department, salary, joining_date, skills";

/// PostgreSQL implementation of EmployeeRepository
///
/// Uses runtime-bound prepared statements; `skills` is stored as a
/// `text[]` column and searched through `unnest`.
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new PostgresEmployeeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps a unique-constraint violation on `employee_id` to `Duplicate`.
fn map_insert_error(e: sqlx::Error, employee_id: &str) -> RepositoryError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return RepositoryError::Duplicate(employee_id.to_string());
        }
    }
    RepositoryError::Database(e)
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn insert(&self, employee: &Employee) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO employees (id, employee_id, name, department, salary, joining_date, skills)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(employee.id)
        .bind(&employee.employee_id)
        .bind(&employee.name)
        .bind(&employee.department)
        .bind(employee.salary)
        .bind(employee.joining_date)
        .bind(&employee.skills)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, &employee.employee_id))?;

        Ok(())
    }

    async fn list(
        &self,
        department: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query_as::<_, Employee>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE ($1::text IS NULL OR department = $1)
            ORDER BY joining_date DESC
            OFFSET $2 LIMIT $3
            "#
        ))
        .bind(department)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn search_by_skill(
        &self,
        skill: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Employee>, RepositoryError> {
        // Exact element match ignoring case, so "java" and "Java" hit
        // the same records.
        let rows = sqlx::query_as::<_, Employee>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE EXISTS (
                SELECT 1 FROM unnest(skills) AS s WHERE lower(s) = lower($1)
            )
            ORDER BY joining_date DESC
            OFFSET $2 LIMIT $3
            "#
        ))
        .bind(skill)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_employee_id(
        &self,
        employee_id: &str,
    ) -> Result<Option<Employee>, RepositoryError> {
        let row = sqlx::query_as::<_, Employee>(&format!(
            r#"
            SELECT {EMPLOYEE_COLUMNS}
            FROM employees
            WHERE employee_id = $1
            "#
        ))
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        employee_id: &str,
        update: &EmployeeUpdate,
    ) -> Result<Employee, RepositoryError> {
        // COALESCE keeps every column whose field was not supplied.
        let row = sqlx::query_as::<_, Employee>(&format!(
            r#"
            UPDATE employees SET
                name = COALESCE($2::text, name),
                department = COALESCE($3::text, department),
                salary = COALESCE($4::bigint, salary),
                joining_date = COALESCE($5::date, joining_date),
                skills = COALESCE($6::text[], skills)
            WHERE employee_id = $1
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        ))
        .bind(employee_id)
        .bind(update.name.as_deref())
        .bind(update.department.as_deref())
        .bind(update.salary)
        .bind(update.joining_date)
        .bind(update.skills.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, employee_id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn average_salary_by_department(
        &self,
    ) -> Result<Vec<DepartmentAverage>, RepositoryError> {
        let rows = sqlx::query_as::<_, DepartmentAverage>(
            r#"
            SELECT department, ROUND(AVG(salary))::float8 AS avg_salary
            FROM employees
            GROUP BY department
            ORDER BY department
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
