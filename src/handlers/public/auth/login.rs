use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::database::UserStore;
use crate::error::ApiError;
use crate::validation::required_text;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /api/auth/login - Authenticate and receive a bearer token
///
/// Unknown email and wrong password produce the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let email = required_text("email", payload.email.as_deref())?;
    let password = required_text("password", payload.password.as_deref())?;

    let users = UserStore::new(state.pool.clone());
    let user = users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let matches = bcrypt::verify(&password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification failed: {}", e);
        ApiError::internal("Failed to log in")
    })?;
    if !matches {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = generate_jwt(Claims::new(&user)).map_err(|e| {
        tracing::error!("token generation failed: {}", e);
        ApiError::internal("Failed to log in")
    })?;

    Ok(Json(json!({ "token": token, "user": user })))
}
