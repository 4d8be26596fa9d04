use axum::{
    extract::{Extension, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppError,
    handlers::common::ensure_self,
    models::{
        leave_request::{LeaveDecisionPayload, LeaveDetail, LeaveIdInput, LeaveStatus},
        user::User,
        ApiResponse,
    },
    state::AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamQuery {
    /// Manager the leaves are addressed to; must be the caller.
    #[serde(rename = "approverId")]
    pub approver_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DecisionQuery {
    #[serde(rename = "approverId")]
    pub approver_id: Option<String>,
    /// `APPROVED` or `REJECTED`.
    pub status: Option<String>,
}

pub async fn list_team_leaves(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<TeamQuery>,
) -> Result<Json<ApiResponse<Vec<LeaveDetail>>>, AppError> {
    let approver_id = ensure_self(&user, query.approver_id.as_deref(), "approverId")?;

    let leaves = state
        .leaves
        .find_pending_for_approver(&state.pool, approver_id)
        .await?
        .into_iter()
        .map(LeaveDetail::from)
        .collect();

    Ok(Json(ApiResponse::ok("Team leaves fetched successfully", leaves)))
}

fn parse_leave_ids(inputs: &[LeaveIdInput]) -> Result<Vec<i64>, AppError> {
    if inputs.is_empty() {
        return Err(AppError::BadRequest("No leave ids provided".into()));
    }
    inputs
        .iter()
        .map(|input| {
            input
                .to_id()
                .ok_or_else(|| AppError::BadRequest("Leave ids must be numeric".into()))
        })
        .collect()
}

pub async fn update_leave_status(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<DecisionQuery>,
    Json(payload): Json<LeaveDecisionPayload>,
) -> Result<Json<ApiResponse<Vec<i64>>>, AppError> {
    let approver_id = ensure_self(&user, query.approver_id.as_deref(), "approverId")?;
    let decision = query
        .status
        .as_deref()
        .and_then(LeaveStatus::parse_decision)
        .ok_or_else(|| AppError::BadRequest("Status must be APPROVED or REJECTED".into()))?;
    let ids = parse_leave_ids(&payload.leave_ids)?;

    let decided = state
        .leaves
        .decide(&state.pool, approver_id, &ids, decision, Utc::now())
        .await?;

    if decided.is_empty() {
        return Err(AppError::NotFound(
            "No pending leaves found for the given ids".into(),
        ));
    }

    tracing::info!(
        approver_id,
        decision = decision.as_str(),
        count = decided.len(),
        "Leaves decided"
    );

    let message = match decision {
        LeaveStatus::Approved => "Leave(s) approved successfully!",
        _ => "Leave(s) rejected successfully!",
    };
    Ok(Json(ApiResponse::ok(message, decided)))
}
