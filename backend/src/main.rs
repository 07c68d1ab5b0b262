use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nexo_backend::domain::GeminiInsightProvider;
use nexo_backend::rest::{router, AppState};
use nexo_backend::storage::json::JsonConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let connection = match env::var("NEXO_DATA_DIR") {
        Ok(dir) => JsonConnection::new(dir)?,
        Err(_) => JsonConnection::new_default()?,
    };

    // An empty key is tolerated; requests will fail and every analysis
    // falls back to the static response.
    let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set; insight analysis will use the fallback");
    }
    let provider = Arc::new(GeminiInsightProvider::new(api_key)?);

    let state = AppState::new(Arc::new(connection), provider);
    state.user_service.seed_master_admin()?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let static_dir =
        PathBuf::from(env::var("NEXO_STATIC_DIR").unwrap_or_else(|_| "./static".to_string()));
    let app = router(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors);

    let addr: SocketAddr = env::var("NEXO_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
