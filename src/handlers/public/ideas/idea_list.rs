use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::models::Idea;
use crate::database::IdeaStore;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    // Captured as a raw string so a malformed value never rejects the request
    #[serde(rename = "_limit")]
    pub limit: Option<String>,
}

/// GET /api/ideas - list ideas sorted by creation time, newest first
///
/// `_limit` caps the result when it parses as a positive integer and is
/// silently ignored otherwise.
pub async fn idea_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Idea>>, ApiError> {
    let limit = parse_limit(query.limit.as_deref());
    let ideas = IdeaStore::new(state.pool.clone()).find(limit).await?;
    Ok(Json(ideas))
}

fn parse_limit(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|n| *n > 0)
}
