use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::utils::wire_date::serde_wire_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveType {
    SickLeave,
    CasualLeave,
    PlannedLeave,
    PrivilegeLeave,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::SickLeave,
        LeaveType::CasualLeave,
        LeaveType::PlannedLeave,
        LeaveType::PrivilegeLeave,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::SickLeave => "SICK_LEAVE",
            LeaveType::CasualLeave => "CASUAL_LEAVE",
            LeaveType::PlannedLeave => "PLANNED_LEAVE",
            LeaveType::PrivilegeLeave => "PRIVILEGE_LEAVE",
        }
    }

    /// Human-readable label used in leave lists.
    pub fn display_name(&self) -> &'static str {
        match self {
            LeaveType::SickLeave => "Sick Leave",
            LeaveType::CasualLeave => "Casual Leave",
            LeaveType::PlannedLeave => "Planned Leave",
            LeaveType::PrivilegeLeave => "Privilege Leave",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLeaveType(pub String);

impl fmt::Display for UnknownLeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown leave type: {}", self.0)
    }
}

impl std::error::Error for UnknownLeaveType {}

impl FromStr for LeaveType {
    type Err = UnknownLeaveType;

    /// Accepts any casing, so the form's `Sick_Leave` maps to `SICK_LEAVE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        LeaveType::ALL
            .into_iter()
            .find(|leave_type| leave_type.as_str() == upper)
            .ok_or_else(|| UnknownLeaveType(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for LeaveType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type, Default)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }

    /// Parses a manager decision; only `APPROVED` and `REJECTED` qualify.
    pub fn parse_decision(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "APPROVED" => Some(LeaveStatus::Approved),
            "REJECTED" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }
}

/// Stored leave request joined with the employee, project and approver names.
#[derive(Debug, Clone, FromRow)]
pub struct LeaveRequest {
    pub id: i64,
    pub emp_id: String,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub number_of_days: i32,
    pub reason: String,
    pub project_id: i64,
    pub project_name: String,
    pub approver_id: String,
    pub approver_name: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, LeaveStatus::Pending)
    }
}

/// Validated leave application ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLeaveRequest {
    pub emp_id: String,
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub number_of_days: i32,
    pub reason: String,
    pub project_id: i64,
    pub approver_id: String,
    pub applied_date: NaiveDate,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Leave form submission. Dates use the `MM/DD/YYYY` wire format.
pub struct ApplyLeavePayload {
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub from_date: String,
    #[serde(default)]
    pub to_date: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub approver_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Leave row as shown in history and approval tables.
pub struct LeaveDetail {
    pub id: i64,
    pub leave_type: LeaveType,
    /// Label shown in leave tables, e.g. `Casual Leave`.
    pub leave_type_name: String,
    #[serde(with = "serde_wire_date")]
    #[schema(value_type = String, example = "04/14/2025")]
    pub from_date: NaiveDate,
    #[serde(with = "serde_wire_date")]
    #[schema(value_type = String, example = "04/18/2025")]
    pub to_date: NaiveDate,
    pub number_of_days: i32,
    pub reason: String,
    pub project_name: String,
    pub approver_name: String,
    pub status: LeaveStatus,
    #[serde(with = "serde_wire_date")]
    #[schema(value_type = String, example = "04/01/2025")]
    pub applied_date: NaiveDate,
    #[serde(rename = "EmpId")]
    pub emp_id: String,
    pub name: String,
}

impl From<LeaveRequest> for LeaveDetail {
    fn from(request: LeaveRequest) -> Self {
        LeaveDetail {
            id: request.id,
            leave_type: request.leave_type,
            leave_type_name: request.leave_type.display_name().to_string(),
            from_date: request.from_date,
            to_date: request.to_date,
            number_of_days: request.number_of_days,
            reason: request.reason,
            project_name: request.project_name,
            approver_name: request.approver_name,
            status: request.status,
            applied_date: request.applied_date,
            emp_id: request.emp_id,
            name: request.employee_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(untagged)]
/// Leave ids arrive as numbers or as the numeric strings table rows carry.
pub enum LeaveIdInput {
    Number(i64),
    Text(String),
}

impl LeaveIdInput {
    pub fn to_id(&self) -> Option<i64> {
        match self {
            LeaveIdInput::Number(id) => Some(*id),
            LeaveIdInput::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDecisionPayload {
    #[serde(default)]
    pub leave_ids: Vec<LeaveIdInput>,
}
