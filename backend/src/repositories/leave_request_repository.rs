//! Leave request repository trait for dependency injection and testing.
//!
//! This module defines the LeaveRequestRepositoryTrait which can be mocked
//! using mockall for testing purposes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::leave_request::{LeaveRequest, LeaveStatus, NewLeaveRequest};

const LEAVE_SELECT: &str = "SELECT lr.id, lr.emp_id, u.name AS employee_name, lr.leave_type, \
     lr.from_date, lr.to_date, lr.number_of_days, lr.reason, lr.project_id, p.name AS project_name, \
     lr.approver_id, a.name AS approver_name, lr.status, lr.applied_date, lr.decided_at, \
     lr.created_at, lr.updated_at \
     FROM leave_requests lr \
     JOIN users u ON u.emp_id = lr.emp_id \
     JOIN users a ON a.emp_id = lr.approver_id \
     JOIN projects p ON p.id = lr.project_id";

/// Repository trait for LeaveRequest operations.
///
/// Use `MockLeaveRequestRepositoryTrait` in tests to mock the behavior.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaveRequestRepositoryTrait: Send + Sync {
    /// Store a new pending leave request
    async fn create(&self, db: &PgPool, item: &NewLeaveRequest) -> Result<LeaveRequest, AppError>;

    /// Find a leave request by ID
    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<LeaveRequest, AppError>;

    /// Leave history of one employee, newest first
    async fn find_by_employee(&self, db: &PgPool, emp_id: &str) -> Result<Vec<LeaveRequest>, AppError>;

    /// Pending leaves addressed to an approver, oldest application first
    async fn find_pending_for_approver(
        &self,
        db: &PgPool,
        approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, AppError>;

    /// Approve or reject pending leaves addressed to `approver_id`.
    ///
    /// Returns the ids that actually changed. Approval deducts the leave's
    /// business days from the matching balance in the same transaction.
    async fn decide(
        &self,
        db: &PgPool,
        approver_id: &str,
        ids: &[i64],
        decision: LeaveStatus,
        decided_at: DateTime<Utc>,
    ) -> Result<Vec<i64>, AppError>;
}

/// Concrete implementation of LeaveRequestRepositoryTrait
#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveRequestRepository;

impl LeaveRequestRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LeaveRequestRepositoryTrait for LeaveRequestRepository {
    async fn create(&self, db: &PgPool, item: &NewLeaveRequest) -> Result<LeaveRequest, AppError> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO leave_requests (emp_id, leave_type, from_date, to_date, number_of_days, \
             reason, project_id, approver_id, status, applied_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11) \
             RETURNING id",
        )
        .bind(&item.emp_id)
        .bind(item.leave_type.as_str())
        .bind(item.from_date)
        .bind(item.to_date)
        .bind(item.number_of_days)
        .bind(&item.reason)
        .bind(item.project_id)
        .bind(&item.approver_id)
        .bind(LeaveStatus::Pending.as_str())
        .bind(item.applied_date)
        .bind(now)
        .fetch_one(db)
        .await?;

        self.find_by_id(db, id).await
    }

    async fn find_by_id(&self, db: &PgPool, id: i64) -> Result<LeaveRequest, AppError> {
        let query = format!("{} WHERE lr.id = $1", LEAVE_SELECT);
        sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Leave request not found".into()))
    }

    async fn find_by_employee(&self, db: &PgPool, emp_id: &str) -> Result<Vec<LeaveRequest>, AppError> {
        let query = format!(
            "{} WHERE lr.emp_id = $1 ORDER BY lr.applied_date DESC, lr.id DESC",
            LEAVE_SELECT
        );
        let rows = sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(emp_id)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn find_pending_for_approver(
        &self,
        db: &PgPool,
        approver_id: &str,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        let query = format!(
            "{} WHERE lr.approver_id = $1 AND lr.status = $2 ORDER BY lr.applied_date, lr.id",
            LEAVE_SELECT
        );
        let rows = sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(approver_id)
            .bind(LeaveStatus::Pending.as_str())
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    async fn decide(
        &self,
        db: &PgPool,
        approver_id: &str,
        ids: &[i64],
        decision: LeaveStatus,
        decided_at: DateTime<Utc>,
    ) -> Result<Vec<i64>, AppError> {
        let mut tx = db.begin().await?;

        let decided: Vec<(i64, String, String, i32)> = sqlx::query_as(
            "UPDATE leave_requests SET status = $1, decided_at = $2, updated_at = $2 \
             WHERE id = ANY($3) AND approver_id = $4 AND status = $5 \
             RETURNING id, emp_id, leave_type, number_of_days",
        )
        .bind(decision.as_str())
        .bind(decided_at)
        .bind(ids)
        .bind(approver_id)
        .bind(LeaveStatus::Pending.as_str())
        .fetch_all(&mut *tx)
        .await?;

        if decision == LeaveStatus::Approved {
            for (_, emp_id, leave_type, days) in &decided {
                sqlx::query(
                    "UPDATE leave_balances SET balance = GREATEST(balance - $1, 0), updated_at = $2 \
                     WHERE emp_id = $3 AND leave_type = $4",
                )
                .bind(f64::from(*days))
                .bind(decided_at)
                .bind(emp_id)
                .bind(leave_type)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(decided.into_iter().map(|(id, ..)| id).collect())
    }
}
