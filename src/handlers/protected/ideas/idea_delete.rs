use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::utils::ensure_owner;
use crate::database::store::parse_id;
use crate::database::IdeaStore;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// DELETE /api/ideas/:id - remove an idea owned by the caller
pub async fn idea_delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;

    let store = IdeaStore::new(state.pool.clone());
    let existing = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Idea not found"))?;
    ensure_owner(&existing, &auth)?;

    if !store.delete_by_id(id).await? {
        return Err(ApiError::not_found("Idea not found"));
    }

    Ok(Json(json!({ "message": "Idea deleted" })))
}
