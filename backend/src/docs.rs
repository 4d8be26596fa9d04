#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    handlers::{
        approvals::{DecisionQuery, TeamQuery},
        common::EmployeeQuery,
        leave::BalanceQuery,
    },
    models::{
        leave_balance::LeaveBalanceResponse,
        leave_request::{
            ApplyLeavePayload, LeaveDecisionPayload, LeaveDetail, LeaveIdInput, LeaveStatus,
            LeaveType,
        },
        project::ProjectResponse,
        user::{LoginRequest, LoginResponse, UserResponse},
    },
    validation::LeaveField,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_doc,
        login_doc,
        employee_projects_doc,
        leave_balance_doc,
        apply_leave_doc,
        my_leaves_doc,
        team_leaves_doc,
        update_leave_status_doc
    ),
    components(
        schemas(
            // auth
            LoginRequest,
            LoginResponse,
            UserResponse,
            // projects
            ProjectResponse,
            // leave
            LeaveType,
            LeaveStatus,
            LeaveField,
            LeaveBalanceResponse,
            ApplyLeavePayload,
            LeaveDetail,
            LeaveIdInput,
            LeaveDecisionPayload
        )
    ),
    modifiers(&SecuritySchemes),
    tags(
        (name = "Auth", description = "Login and session snapshot"),
        (name = "Employees", description = "Employee projects"),
        (name = "Leave", description = "Balances, applications and history"),
        (name = "Approvals", description = "Manager review of team leaves"),
        (name = "System", description = "Operational endpoints")
    ),
    security(("BearerAuth" = []))
)]
pub struct ApiDoc;

struct SecuritySchemes;

impl Modify for SecuritySchemes {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_default();

        let mut bearer = Http::new(HttpAuthScheme::Bearer);
        bearer.bearer_format = Some("JWT".to_string());

        components.add_security_scheme("BearerAuth", SecurityScheme::Http(bearer));
    }
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = serde_json::Value)),
    tag = "System",
    security(())
)]
fn health_doc() {}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 400, description = "Credential rules failed"),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "Auth",
    security(())
)]
fn login_doc() {}

#[utoipa::path(
    get,
    path = "/api/employees/projects",
    params(EmployeeQuery),
    responses(
        (status = 200, body = [ProjectResponse]),
        (status = 403, description = "Not the caller's records")
    ),
    tag = "Employees"
)]
fn employee_projects_doc() {}

#[utoipa::path(
    get,
    path = "/api/leave/balance",
    params(BalanceQuery),
    responses(
        (status = 200, body = LeaveBalanceResponse),
        (status = 404, description = "No balance granted for this leave type")
    ),
    tag = "Leave"
)]
fn leave_balance_doc() {}

#[utoipa::path(
    post,
    path = "/api/leave/apply",
    params(EmployeeQuery),
    request_body = ApplyLeavePayload,
    responses(
        (status = 201, description = "Leave applied", body = LeaveDetail),
        (status = 400, description = "Field errors keyed by form field")
    ),
    tag = "Leave"
)]
fn apply_leave_doc() {}

#[utoipa::path(
    get,
    path = "/api/leave/user",
    params(EmployeeQuery),
    responses((status = 200, body = [LeaveDetail])),
    tag = "Leave"
)]
fn my_leaves_doc() {}

#[utoipa::path(
    get,
    path = "/api/leave/team",
    params(TeamQuery),
    responses(
        (status = 200, body = [LeaveDetail]),
        (status = 403, description = "Caller is not a manager")
    ),
    tag = "Approvals"
)]
fn team_leaves_doc() {}

#[utoipa::path(
    put,
    path = "/api/leave/status",
    params(DecisionQuery),
    request_body = LeaveDecisionPayload,
    responses(
        (status = 200, description = "Ids of the leaves that changed", body = [i64]),
        (status = 400, description = "Empty id list or unknown status"),
        (status = 404, description = "No pending leave matched")
    ),
    tag = "Approvals"
)]
fn update_leave_status_doc() {}
