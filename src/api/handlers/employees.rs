use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AuthenticatedUser;
use crate::domain::employee::{Employee, EmployeeUpdate};
use crate::domain::repositories::{DepartmentAverage, EmployeeRepository, RepositoryError};
use crate::infrastructure::repositories::PostgresEmployeeRepository;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Request body for creating an employee
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: i64,
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Employee record as returned to clients
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: i64,
    pub joining_date: NaiveDate,
    pub skills: Vec<String>,
}

impl From<&Employee> for EmployeeResponse {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            salary: employee.salary,
            joining_date: employee.joining_date,
            skills: employee.skills.clone(),
        }
    }
}

/// Query parameters for listing employees
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub department: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the skill search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub skill: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Resolves skip/limit defaults and bounds (skip >= 0, 1 <= limit <= 100).
fn paging(skip: Option<i64>, limit: Option<i64>) -> Result<(i64, i64), ApiError> {
    let skip = skip.unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if skip < 0 {
        return Err(ApiError::bad_request("skip must be non-negative"));
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::bad_request(format!(
            "limit must be between 1 and {}",
            MAX_LIMIT
        )));
    }

    Ok((skip, limit))
}

/// Create a new employee
///
/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    actor: Option<Extension<AuthenticatedUser>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), ApiError> {
    let employee = Employee::new(
        req.employee_id,
        req.name,
        req.department,
        req.salary,
        req.joining_date,
        req.skills,
    )
    .map_err(ApiError::bad_request)?;

    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    repo.insert(&employee).await.map_err(|e| match e {
        RepositoryError::Duplicate(_) => ApiError::conflict("employee_id already exists"),
        other => ApiError::from(other),
    })?;

    if let Some(Extension(AuthenticatedUser(username))) = actor {
        tracing::info!(employee_id = %employee.employee_id, by = %username, "employee created");
    }

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(&employee))))
}

/// List employees, optionally filtered by department
///
/// GET /employees?department=&skip=&limit=
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    let (skip, limit) = paging(params.skip, params.limit)?;

    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    let employees = repo
        .list(params.department.as_deref(), skip, limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(employees.iter().map(EmployeeResponse::from).collect()))
}

/// Search employees by skill (case-insensitive)
///
/// GET /employees/search?skill=&skip=&limit=
pub async fn search_employees(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<EmployeeResponse>>, ApiError> {
    if params.skill.trim().is_empty() {
        return Err(ApiError::bad_request("skill must not be empty"));
    }
    let (skip, limit) = paging(params.skip, params.limit)?;

    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    let employees = repo
        .search_by_skill(&params.skill, skip, limit)
        .await
        .map_err(ApiError::from)?;

    if employees.is_empty() {
        return Err(ApiError::not_found("Employee not found"));
    }

    Ok(Json(employees.iter().map(EmployeeResponse::from).collect()))
}

/// Average salary per department
///
/// GET /employees/avg-salary
pub async fn avg_salary_by_department(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentAverage>>, ApiError> {
    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    let averages = repo
        .average_salary_by_department()
        .await
        .map_err(ApiError::from)?;

    if averages.is_empty() {
        return Err(ApiError::not_found("Employee not found"));
    }

    Ok(Json(averages))
}

/// Get an employee by its business identifier
///
/// GET /employees/:employee_id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    let employee = repo
        .find_by_employee_id(&employee_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("Employee not found"))?;

    Ok(Json(EmployeeResponse::from(&employee)))
}

/// Partially update an employee; only supplied fields change
///
/// PUT /employees/:employee_id
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(update): Json<EmployeeUpdate>,
) -> Result<Json<EmployeeResponse>, ApiError> {
    if update.is_empty() {
        return Err(ApiError::bad_request("No fields provided for update"));
    }
    update.validate().map_err(ApiError::bad_request)?;

    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    let employee = repo
        .update(&employee_id, &update)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(EmployeeResponse::from(&employee)))
}

/// Delete an employee
///
/// DELETE /employees/:employee_id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let repo = PostgresEmployeeRepository::new(state.pool.clone());
    repo.delete(&employee_id).await.map_err(ApiError::from)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Employee {} deleted", employee_id)
    })))
}
