use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::{
        user::{LoginRequest, LoginResponse},
        ApiResponse,
    },
    state::AppState,
    utils::{jwt::create_access_token, password::verify_password},
    validation::Validate,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    payload.validate()?;

    let user = state
        .users
        .find_by_username(&state.pool, payload.username.trim())
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.into()))?;

    if !verify_password(&payload.password, &user.password_hash)? {
        tracing::info!(username = %user.username, "Rejected login with wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let access_token = create_access_token(
        user.emp_id.clone(),
        user.username.clone(),
        user.is_manager,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    tracing::info!(emp_id = %user.emp_id, "User logged in");

    Ok(Json(ApiResponse::ok(
        "Login successful",
        LoginResponse {
            user: user.into(),
            access_token,
        },
    )))
}
