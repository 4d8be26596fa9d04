//! Project assignments and their approvers.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::project::Project;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    /// Projects the employee is assigned to, ordered by name
    async fn find_for_employee(&self, db: &PgPool, emp_id: &str) -> Result<Vec<Project>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectRepository;

impl ProjectRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProjectRepositoryTrait for ProjectRepository {
    async fn find_for_employee(&self, db: &PgPool, emp_id: &str) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, Project>(
            "SELECT p.id, p.name, p.description, p.approver_id, a.name AS approver_name \
             FROM projects p \
             JOIN employee_projects ep ON ep.project_id = p.id \
             LEFT JOIN users a ON a.emp_id = p.approver_id \
             WHERE ep.emp_id = $1 \
             ORDER BY p.name",
        )
        .bind(emp_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
