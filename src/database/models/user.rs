use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Registered account. The bcrypt hash never leaves the server.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Fields persisted on registration
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
