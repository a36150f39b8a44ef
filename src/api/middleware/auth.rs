use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::errors::ApiError;
use crate::auth::jwt::verify_token;
use crate::state::AppState;

/// Username of the verified caller, inserted into request extensions by
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub String);

/// Bearer-token gate for the employee routes.
///
/// Verifies the `Authorization: Bearer <token>` header and records the
/// token subject on the request. When `AUTH_REQUIRED` is off the gate
/// passes every request through untouched.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.auth_required {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::unauthorized("Invalid authorization format. Use: Bearer <token>")
    })?;

    let claims = verify_token(token, &state.config.jwt_secret)
        .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

    req.extensions_mut().insert(AuthenticatedUser(claims.sub));

    Ok(next.run(req).await)
}
