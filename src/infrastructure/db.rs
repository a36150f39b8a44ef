use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::config::AppConfig;
use crate::domain::repositories::user_repository::User;
use crate::domain::repositories::{RepositoryError, UserRepository};
use crate::infrastructure::repositories::PostgresUserRepository;

/// Connects the process-wide connection pool.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
}

/// Applies the schema idempotently at startup: tables, the unique
/// employee_id index, and the secondary indexes on joining date and
/// skills.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY,
            employee_id TEXT NOT NULL,
            name TEXT NOT NULL,
            department TEXT NOT NULL,
            salary BIGINT NOT NULL CHECK (salary >= 0),
            joining_date DATE NOT NULL,
            skills TEXT[] NOT NULL DEFAULT '{}'
        )
        "#,
        "CREATE UNIQUE INDEX IF NOT EXISTS employees_employee_id_key ON employees (employee_id)",
        "CREATE INDEX IF NOT EXISTS employees_joining_date_idx ON employees (joining_date)",
        "CREATE INDEX IF NOT EXISTS employees_skills_idx ON employees USING GIN (skills)",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

/// Seeds the configured admin credential if it does not exist yet.
pub async fn seed_admin(pool: &PgPool, config: &AppConfig) -> Result<(), String> {
    let user_repo = PostgresUserRepository::new(pool.clone());

    let existing = user_repo
        .find_by_username(&config.admin_username)
        .await
        .map_err(|e| e.to_string())?;
    if existing.is_some() {
        return Ok(());
    }

    let password_hash = hash_password(&config.admin_password)?;
    let user = User {
        id: Uuid::new_v4(),
        username: config.admin_username.clone(),
        password_hash,
    };

    match user_repo.create(&user).await {
        Ok(()) => {
            tracing::info!(username = %config.admin_username, "seeded admin user");
            Ok(())
        }
        // Another instance seeded it between our read and write.
        Err(RepositoryError::Duplicate(_)) => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}
