use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee record
///
/// `employee_id` is the business identifier exposed to clients and is
/// unique across the collection; `id` is the storage key.
///
/// # Invariants
/// - `employee_id`, `name`, and `department` cannot be empty
/// - `salary` cannot be negative
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: i64,
    pub joining_date: NaiveDate,
    pub skills: Vec<String>,
}

impl Employee {
    /// Creates a new Employee, enforcing record invariants.
    ///
    /// # Returns
    /// * `Ok(Employee)` - New employee with a freshly generated storage id
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        employee_id: String,
        name: String,
        department: String,
        salary: i64,
        joining_date: NaiveDate,
        skills: Vec<String>,
    ) -> Result<Self, String> {
        if employee_id.trim().is_empty() {
            return Err("employee_id cannot be empty".to_string());
        }
        if name.trim().is_empty() {
            return Err("name cannot be empty".to_string());
        }
        if department.trim().is_empty() {
            return Err("department cannot be empty".to_string());
        }
        if salary < 0 {
            return Err("salary cannot be negative".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            employee_id,
            name,
            department,
            salary,
            joining_date,
            skills,
        })
    }
}

/// Partial update of an employee record; only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub department: Option<String>,
    pub salary: Option<i64>,
    pub joining_date: Option<NaiveDate>,
    pub skills: Option<Vec<String>>,
}

impl EmployeeUpdate {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.joining_date.is_none()
            && self.skills.is_none()
    }

    /// Validates the supplied fields against the record invariants.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name cannot be empty".to_string());
            }
        }
        if let Some(department) = &self.department {
            if department.trim().is_empty() {
                return Err("department cannot be empty".to_string());
            }
        }
        if let Some(salary) = self.salary {
            if salary < 0 {
                return Err("salary cannot be negative".to_string());
            }
        }
        Ok(())
    }
}
