//! Field rules for the leave application form.
//!
//! Every rule runs on every call so a client can highlight all offending
//! fields from a single response.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{models::leave_balance::LeaveBalance, services::business_days::count_business_days};

pub const LEAVE_TYPE_REQUIRED: &str = "Leave type is required";
pub const FROM_DATE_REQUIRED: &str = "From date is required";
pub const TO_DATE_REQUIRED: &str = "To date is required";
pub const TO_BEFORE_FROM: &str = "To date must be after From date";
pub const BALANCE_EXCEEDED: &str = "Requested days exceed available balance";
pub const PROJECT_REQUIRED: &str = "Project is required";
pub const REASON_REQUIRED: &str = "Reason is required";
pub const APPROVER_REQUIRED: &str = "Approver is required";

/// Form fields that can carry an error, named as clients send them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum LeaveField {
    LeaveType,
    FromDate,
    ToDate,
    Project,
    Reason,
    Approver,
}

impl LeaveField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveField::LeaveType => "leaveType",
            LeaveField::FromDate => "fromDate",
            LeaveField::ToDate => "toDate",
            LeaveField::Project => "project",
            LeaveField::Reason => "reason",
            LeaveField::Approver => "approver",
        }
    }
}

pub type FieldErrors = BTreeMap<LeaveField, String>;

/// Candidate leave application as entered by the employee.
#[derive(Debug, Clone, Default)]
pub struct LeaveApplication {
    pub leave_type: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub project: String,
    pub reason: String,
    pub approver: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn from_errors(errors: FieldErrors) -> Self {
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn error(&self, field: LeaveField) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(errors) => errors.get(&field).map(String::as_str),
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        match self {
            ValidationResult::Valid => FieldErrors::new(),
            ValidationResult::Invalid(errors) => errors,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates a leave application against the employee's remaining balance.
///
/// `balance` is `None` while it is unknown; the balance rule is skipped rather
/// than treated as zero.
pub fn validate_leave_application(
    application: &LeaveApplication,
    balance: Option<LeaveBalance>,
) -> ValidationResult {
    let mut errors = FieldErrors::new();

    if is_blank(&application.leave_type) {
        errors.insert(LeaveField::LeaveType, LEAVE_TYPE_REQUIRED.into());
    }
    if application.from.is_none() {
        errors.insert(LeaveField::FromDate, FROM_DATE_REQUIRED.into());
    }
    if application.to.is_none() {
        errors.insert(LeaveField::ToDate, TO_DATE_REQUIRED.into());
    }

    if let (Some(from), Some(to)) = (application.from, application.to) {
        match count_business_days(from, to) {
            Err(_) => {
                errors.insert(LeaveField::ToDate, TO_BEFORE_FROM.into());
            }
            Ok(requested) => {
                if let Some(balance) = balance {
                    if !balance.covers(requested) {
                        errors.insert(LeaveField::ToDate, BALANCE_EXCEEDED.into());
                    }
                }
            }
        }
    }

    if is_blank(&application.project) {
        errors.insert(LeaveField::Project, PROJECT_REQUIRED.into());
    }
    if is_blank(&application.reason) {
        errors.insert(LeaveField::Reason, REASON_REQUIRED.into());
    }
    if is_blank(&application.approver) {
        errors.insert(LeaveField::Approver, APPROVER_REQUIRED.into());
    }

    ValidationResult::from_errors(errors)
}
