use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::StoreError;
use crate::database::models::{Idea, NewUser, User};
use crate::validation::IdeaDraft;

/// Parse a raw path id.
///
/// A malformed id is indistinguishable from a missing record: clients get
/// the same not-found response either way.
pub fn parse_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::NotFound("Idea not found".to_string()))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let result = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password_hash",
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            // The unique index catches registrations that race the pre-check
            Err(e) if is_unique_violation(&e) => {
                Err(StoreError::Conflict("User already exists".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

pub struct IdeaStore {
    pool: PgPool,
}

impl IdeaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List ideas, newest first, optionally capped
    pub async fn find(&self, limit: Option<i64>) -> Result<Vec<Idea>, StoreError> {
        let ideas = match limit {
            Some(n) => {
                sqlx::query_as::<_, Idea>(
                    "SELECT id, title, description, summary, tags, owner, created_at
                     FROM ideas ORDER BY created_at DESC LIMIT $1",
                )
                .bind(n)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Idea>(
                    "SELECT id, title, description, summary, tags, owner, created_at
                     FROM ideas ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(ideas)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            "SELECT id, title, description, summary, tags, owner, created_at
             FROM ideas WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(idea)
    }

    pub async fn insert(&self, draft: IdeaDraft, owner: Uuid) -> Result<Idea, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            "INSERT INTO ideas (id, title, description, summary, tags, owner)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, description, summary, tags, owner, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.summary)
        .bind(&draft.tags)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(idea)
    }

    /// Replace the editable fields; owner and created_at stay untouched
    pub async fn update_by_id(&self, id: Uuid, draft: IdeaDraft) -> Result<Option<Idea>, StoreError> {
        let idea = sqlx::query_as::<_, Idea>(
            "UPDATE ideas SET title = $2, description = $3, summary = $4, tags = $5
             WHERE id = $1
             RETURNING id, title, description, summary, tags, owner, created_at",
        )
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.summary)
        .bind(&draft.tags)
        .fetch_optional(&self.pool)
        .await?;

        Ok(idea)
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM ideas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
