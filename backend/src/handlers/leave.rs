use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    handlers::common::{ensure_self, EmployeeQuery},
    models::{
        leave_balance::LeaveBalanceResponse,
        leave_request::{ApplyLeavePayload, LeaveDetail, LeaveType, NewLeaveRequest},
        user::User,
        ApiResponse,
    },
    services::business_days::count_business_days,
    state::AppState,
    utils::{time::today_local, wire_date::from_wire_format},
    validation::{validate_leave_application, FieldErrors, LeaveApplication, LeaveField},
};

pub const FROM_DATE_FORMAT: &str = "From date must be in MM/DD/YYYY format";
pub const TO_DATE_FORMAT: &str = "To date must be in MM/DD/YYYY format";
pub const UNKNOWN_LEAVE_TYPE: &str = "Unknown leave type";
pub const PROJECT_NOT_ASSIGNED: &str = "Project is not assigned to you";
pub const APPROVER_MISMATCH: &str = "Approver does not manage this project";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BalanceQuery {
    #[serde(rename = "EmpId")]
    pub emp_id: Option<String>,
    #[serde(rename = "leaveType")]
    pub leave_type: Option<String>,
}

pub async fn get_balance(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<BalanceQuery>,
) -> Result<Json<ApiResponse<LeaveBalanceResponse>>, AppError> {
    let emp_id = ensure_self(&user, query.emp_id.as_deref(), "EmpId")?;
    let raw_type = query
        .leave_type
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("leaveType is required".into()))?;
    let leave_type: LeaveType = raw_type
        .parse()
        .map_err(|_| AppError::BadRequest(format!("{}: {}", UNKNOWN_LEAVE_TYPE, raw_type)))?;

    let record = state
        .balances
        .find(&state.pool, emp_id, leave_type)
        .await?
        .ok_or_else(|| AppError::NotFound("Leave balance not found".into()))?;

    Ok(Json(ApiResponse::ok(
        "Leave balance fetched successfully",
        LeaveBalanceResponse::from(record),
    )))
}

pub async fn list_my_leaves(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<ApiResponse<Vec<LeaveDetail>>>, AppError> {
    let emp_id = ensure_self(&user, query.emp_id.as_deref(), "EmpId")?;

    let leaves = state
        .leaves
        .find_by_employee(&state.pool, emp_id)
        .await?
        .into_iter()
        .map(LeaveDetail::from)
        .collect();

    Ok(Json(ApiResponse::ok("Leaves fetched successfully", leaves)))
}

/// Blank input means "not entered"; anything else must be a wire date.
fn parse_form_date(
    raw: &str,
    field: LeaveField,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match from_wire_format(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(field, message.to_string());
            None
        }
    }
}

pub async fn apply_leave(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<EmployeeQuery>,
    Json(payload): Json<ApplyLeavePayload>,
) -> Result<(StatusCode, Json<ApiResponse<LeaveDetail>>), AppError> {
    let emp_id = ensure_self(&user, query.emp_id.as_deref(), "EmpId")?.to_string();

    let mut format_errors = FieldErrors::new();
    let from = parse_form_date(
        &payload.from_date,
        LeaveField::FromDate,
        FROM_DATE_FORMAT,
        &mut format_errors,
    );
    let to = parse_form_date(
        &payload.to_date,
        LeaveField::ToDate,
        TO_DATE_FORMAT,
        &mut format_errors,
    );

    let leave_type = payload.leave_type.parse::<LeaveType>().ok();
    let balance = match leave_type {
        Some(leave_type) => state
            .balances
            .find(&state.pool, &emp_id, leave_type)
            .await?
            .and_then(|record| record.balance()),
        None => None,
    };

    let application = LeaveApplication {
        leave_type: payload.leave_type.clone(),
        from,
        to,
        project: payload.project_name.clone(),
        reason: payload.reason.clone(),
        approver: payload.approver_name.clone(),
    };
    let mut errors = validate_leave_application(&application, balance).into_errors();
    // A malformed date is reported as such rather than as missing.
    errors.extend(format_errors);
    if !errors.is_empty() {
        tracing::debug!(
            emp_id = %emp_id,
            fields = ?errors.keys().collect::<Vec<_>>(),
            "Leave application failed validation"
        );
        return Err(errors.into());
    }

    let (Some(from), Some(to)) = (from, to) else {
        return Err(AppError::BadRequest("Leave dates are required".into()));
    };

    let projects = state.projects.find_for_employee(&state.pool, &emp_id).await?;
    let project = projects
        .iter()
        .find(|project| project.name == payload.project_name.trim());

    let mut errors = FieldErrors::new();
    if leave_type.is_none() {
        errors.insert(LeaveField::LeaveType, UNKNOWN_LEAVE_TYPE.into());
    }
    let approver_id = match project {
        None => {
            errors.insert(LeaveField::Project, PROJECT_NOT_ASSIGNED.into());
            None
        }
        Some(project) => match &project.approver_id {
            Some(approver_id) if project.is_approved_by(&payload.approver_name) => {
                Some(approver_id.clone())
            }
            _ => {
                errors.insert(LeaveField::Approver, APPROVER_MISMATCH.into());
                None
            }
        },
    };
    let (Some(leave_type), Some(project), Some(approver_id)) = (leave_type, project, approver_id)
    else {
        return Err(errors.into());
    };

    let days = count_business_days(from, to)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let number_of_days = i32::try_from(days)
        .map_err(|_| AppError::BadRequest("Leave range is too long".into()))?;

    let new_leave = NewLeaveRequest {
        emp_id,
        leave_type,
        from_date: from,
        to_date: to,
        number_of_days,
        reason: payload.reason.trim().to_string(),
        project_id: project.id,
        approver_id,
        applied_date: today_local(&state.config.time_zone),
    };

    let stored = state.leaves.create(&state.pool, &new_leave).await?;
    tracing::info!(
        leave_id = stored.id,
        emp_id = %stored.emp_id,
        leave_type = %stored.leave_type,
        number_of_days = stored.number_of_days,
        "Leave applied"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            "Leave applied successfully",
            LeaveDetail::from(stored),
        )),
    ))
}
