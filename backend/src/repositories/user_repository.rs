//! User repository trait for dependency injection and testing.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::user::User;

const USER_COLUMNS: &str =
    "emp_id, username, password_hash, name, designation, is_manager, created_at, updated_at";

/// Repository trait for User lookups.
///
/// Use `MockUserRepositoryTrait` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Find a user by login name
    async fn find_by_username(&self, db: &PgPool, username: &str) -> Result<Option<User>, AppError>;

    /// Find a user by employee id
    async fn find_by_emp_id(&self, db: &PgPool, emp_id: &str) -> Result<Option<User>, AppError>;
}

/// Concrete implementation of UserRepositoryTrait
#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn find_by_username(&self, db: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }

    async fn find_by_emp_id(&self, db: &PgPool, emp_id: &str) -> Result<Option<User>, AppError> {
        let query = format!("SELECT {} FROM users WHERE emp_id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(emp_id)
            .fetch_optional(db)
            .await?;
        Ok(user)
    }
}
