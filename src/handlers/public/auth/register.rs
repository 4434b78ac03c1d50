use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::database::models::NewUser;
use crate::database::UserStore;
use crate::error::ApiError;
use crate::validation::required_text;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /api/auth/register - Register a new user account
///
/// Expected input: `{ "name": "...", "email": "...", "password": "..." }`.
/// The password is stored as a bcrypt hash and never returned; a duplicate
/// email responds 400.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = required_text("name", payload.name.as_deref())?;
    let email = required_text("email", payload.email.as_deref())?;
    let password = required_text("password", payload.password.as_deref())?;

    let users = UserStore::new(state.pool.clone());
    if users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        ApiError::internal("Failed to register user")
    })?;

    let user = users
        .insert(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "user": user }))))
}
