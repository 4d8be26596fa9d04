use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{config::Config, docs::ApiDoc, handlers, middleware, state::AppState};

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60))
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    // Public routes (no auth)
    let public_routes = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/auth/login", post(handlers::login));

    // Employee routes (auth required)
    let user_routes = Router::new()
        .route(
            "/api/employees/projects",
            get(handlers::list_employee_projects),
        )
        .route("/api/leave/balance", get(handlers::get_balance))
        .route("/api/leave/apply", post(handlers::apply_leave))
        .route("/api/leave/user", get(handlers::list_my_leaves))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth,
        ));

    // Manager routes (auth + manager flag)
    let manager_routes = Router::new()
        .route("/api/leave/team", get(handlers::list_team_leaves))
        .route("/api/leave/status", put(handlers::update_leave_status))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_manager,
        ));

    let cors = cors_layer(&state.config);

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(manager_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum_middleware::from_fn(middleware::log_error_responses)),
        )
        .with_state(state)
}
