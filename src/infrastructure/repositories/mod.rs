// PostgreSQL repository implementations

pub mod postgres_employee_repository;
pub mod postgres_user_repository;

pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_user_repository::PostgresUserRepository;
