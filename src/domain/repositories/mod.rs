// Repository contracts and the shared persistence error taxonomy

pub mod employee_repository;
pub mod user_repository;

pub use employee_repository::{DepartmentAverage, EmployeeRepository};
pub use user_repository::UserRepository;

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched the given identifier.
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
