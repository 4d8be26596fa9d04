//! Leave balance lookups.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{leave_balance::LeaveBalanceRecord, leave_request::LeaveType};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveBalanceRepositoryTrait: Send + Sync {
    /// Remaining balance for one employee and leave type, if one was granted
    async fn find(
        &self,
        db: &PgPool,
        emp_id: &str,
        leave_type: LeaveType,
    ) -> Result<Option<LeaveBalanceRecord>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveBalanceRepository;

impl LeaveBalanceRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeaveBalanceRepositoryTrait for LeaveBalanceRepository {
    async fn find(
        &self,
        db: &PgPool,
        emp_id: &str,
        leave_type: LeaveType,
    ) -> Result<Option<LeaveBalanceRecord>, AppError> {
        let row = sqlx::query_as::<_, LeaveBalanceRecord>(
            "SELECT b.emp_id, u.name AS employee_name, b.leave_type, b.balance \
             FROM leave_balances b \
             JOIN users u ON u.emp_id = b.emp_id \
             WHERE b.emp_id = $1 AND b.leave_type = $2",
        )
        .bind(emp_id)
        .bind(leave_type.as_str())
        .fetch_optional(db)
        .await?;
        Ok(row)
    }
}
