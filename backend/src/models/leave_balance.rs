//! Remaining leave entitlement per employee and leave type.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::leave_request::LeaveType;

/// Remaining business days an employee may still take for one leave type.
///
/// Never negative; an unknown balance is modelled as `Option::None` by callers
/// rather than as zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LeaveBalance(f64);

impl LeaveBalance {
    pub fn new(days: f64) -> Option<Self> {
        (days.is_finite() && days >= 0.0).then_some(Self(days))
    }

    /// Returns `true` when `requested` business days fit in the balance.
    pub fn covers(self, requested: u32) -> bool {
        f64::from(requested) <= self.0
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct LeaveBalanceRecord {
    pub emp_id: String,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub balance: f64,
}

impl LeaveBalanceRecord {
    pub fn balance(&self) -> Option<LeaveBalance> {
        LeaveBalance::new(self.balance)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Balance returned to the leave form.
pub struct LeaveBalanceResponse {
    pub leave_type: LeaveType,
    pub balance: f64,
    #[serde(rename = "EmpId")]
    pub emp_id: String,
    pub name: String,
}

impl From<LeaveBalanceRecord> for LeaveBalanceResponse {
    fn from(record: LeaveBalanceRecord) -> Self {
        LeaveBalanceResponse {
            leave_type: record.leave_type,
            balance: record.balance,
            emp_id: record.emp_id,
            name: record.employee_name,
        }
    }
}
