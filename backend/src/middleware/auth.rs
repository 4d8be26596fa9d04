use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::user::User,
    state::AppState,
    utils::jwt::verify_access_token,
};

pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(request.headers(), &state).await?;
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

// Auth + require the manager flag for approval routes
pub async fn auth_manager(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(request.headers(), &state).await?;
    if !user.is_manager() {
        return Err(AppError::Forbidden(
            "Only managers can review leave requests".into(),
        ));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

async fn authenticate_request(headers: &HeaderMap, state: &AppState) -> Result<User, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".into()))?;

    let claims = verify_access_token(token, &state.config.jwt_secret)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    state
        .users
        .find_by_emp_id(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))
}
