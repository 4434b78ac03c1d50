use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;

use crate::database::IdeaStore;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::validation::IdeaDraft;
use crate::AppState;

/// POST /api/ideas - create an idea owned by the caller
///
/// Expected input: `{ "title": "...", "description": "...", "summary": "...",
/// "tags": "comma, separated" | ["array"] }`.
pub async fn idea_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = IdeaDraft::from_body(&body)?;

    let idea = IdeaStore::new(state.pool.clone())
        .insert(draft, auth.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(idea)))
}
