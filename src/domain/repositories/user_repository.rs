use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::repositories::RepositoryError;

/// Credential record used only to issue authentication tokens.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// Repository trait for credential records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; fails with `Duplicate` when the username is
    /// already taken.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;

    /// Find a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}
