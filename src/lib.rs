pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod validation;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared request context: one lazily-connecting pool handle.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

/// Assemble the full route table once at startup.
pub fn app(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(idea_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pool })
}

fn auth_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

fn idea_routes() -> Router<AppState> {
    use handlers::protected::ideas as protected;
    use handlers::public::ideas as public;

    Router::new()
        .route(
            "/api/ideas",
            get(public::idea_list).post(protected::idea_post),
        )
        .route(
            "/api/ideas/:id",
            get(public::idea_get)
                .put(protected::idea_put)
                .delete(protected::idea_delete),
        )
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match database::manager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
