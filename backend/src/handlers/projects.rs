use axum::{
    extract::{Extension, Query, State},
    Json,
};

use crate::{
    error::AppError,
    handlers::common::{ensure_self, EmployeeQuery},
    models::{project::ProjectResponse, user::User, ApiResponse},
    state::AppState,
};

pub async fn list_employee_projects(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<EmployeeQuery>,
) -> Result<Json<ApiResponse<Vec<ProjectResponse>>>, AppError> {
    let emp_id = ensure_self(&user, query.emp_id.as_deref(), "EmpId")?;

    let projects = state
        .projects
        .find_for_employee(&state.pool, emp_id)
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(ApiResponse::ok("Projects fetched successfully", projects)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::test_support::{employee, get_request, send, Mocks},
        models::project::Project,
    };
    use axum::{http::StatusCode, routing::get, Router};

    fn app(mocks: Mocks) -> Router {
        Router::new()
            .route("/api/employees/projects", get(list_employee_projects))
            .layer(Extension(employee()))
            .with_state(mocks.into_state())
    }

    #[tokio::test]
    async fn lists_own_projects() {
        let mut mocks = Mocks::default();
        mocks
            .projects
            .expect_find_for_employee()
            .withf(|_, emp_id| emp_id == "EMP002")
            .returning(|_, _| {
                Ok(vec![Project {
                    id: 7,
                    name: "Atlas".into(),
                    description: "Billing platform".into(),
                    approver_id: Some("EMP001".into()),
                    approver_name: Some("Jane Smith".into()),
                }])
            });

        let (status, body) = send(
            app(mocks),
            get_request("/api/employees/projects?EmpId=EMP002"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["details"]["data"];
        assert_eq!(data[0]["name"], "Atlas");
        assert_eq!(data[0]["approverName"], "Jane Smith");
    }

    #[tokio::test]
    async fn other_employees_projects_are_forbidden() {
        let (status, body) = send(
            app(Mocks::default()),
            get_request("/api/employees/projects?EmpId=EMP001"),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["details"]["errorCode"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn missing_emp_id_is_a_bad_request() {
        let (status, body) =
            send(app(Mocks::default()), get_request("/api/employees/projects")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["message"], "EmpId is required");
    }
}
