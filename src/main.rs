use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = ideaboard_api::config::config();
    info!("Starting ideaboard API in {:?} mode", config.environment);

    let pool = match ideaboard_api::database::manager::connect(config) {
        Ok(pool) => pool,
        Err(e) => {
            error!("failed to initialize database pool: {}", e);
            std::process::exit(1);
        }
    };

    // The pool is lazy, so a down database first surfaces here; /health keeps
    // reporting degraded until it comes back.
    if let Err(e) = ideaboard_api::database::manager::bootstrap(&pool).await {
        warn!("schema bootstrap failed: {}", e);
    }

    let app = ideaboard_api::app(pool);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    info!("ideaboard API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
