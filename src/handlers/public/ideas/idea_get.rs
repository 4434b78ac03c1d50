use axum::{
    extract::{Path, State},
    Json,
};

use crate::database::models::Idea;
use crate::database::store::parse_id;
use crate::database::IdeaStore;
use crate::error::ApiError;
use crate::AppState;

/// GET /api/ideas/:id - show a single idea
pub async fn idea_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, ApiError> {
    let id = parse_id(&id)?;

    let idea = IdeaStore::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Idea not found"))?;

    Ok(Json(idea))
}
