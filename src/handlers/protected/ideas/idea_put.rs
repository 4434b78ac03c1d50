use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use super::utils::ensure_owner;
use crate::database::models::Idea;
use crate::database::store::parse_id;
use crate::database::IdeaStore;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::validation::IdeaDraft;
use crate::AppState;

/// PUT /api/ideas/:id - replace an idea's editable fields
///
/// Checks run in order: existence, then ownership, then field validation.
/// Owner and createdAt are immutable.
pub async fn idea_put(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Idea>, ApiError> {
    let id = parse_id(&id)?;

    let store = IdeaStore::new(state.pool.clone());
    let existing = store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Idea not found"))?;
    ensure_owner(&existing, &auth)?;

    let draft = IdeaDraft::from_body(&body)?;

    let updated = store
        .update_by_id(id, draft)
        .await?
        .ok_or_else(|| ApiError::not_found("Idea not found"))?;

    Ok(Json(updated))
}
