use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::errors::ApiError;
use crate::auth::jwt::create_token;
use crate::auth::password::verify_password;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::repositories::PostgresUserRepository;
use crate::state::AppState;

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Login with username and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user_repo = PostgresUserRepository::new(state.pool.clone());
    let user = user_repo
        .find_by_username(&req.username)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        // Same message for unknown user and bad password.
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = create_token(
        &user.username,
        &state.config.jwt_secret,
        state.config.token_expiry_minutes,
    )
    .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))?;

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

/// Liveness endpoint
///
/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Employees API is running" }))
}
