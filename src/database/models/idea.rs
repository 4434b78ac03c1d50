use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A titled proposal with description, summary, and tags.
///
/// `owner` is set at creation and immutable afterwards; `created_at` drives
/// the default newest-first listing order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
}
