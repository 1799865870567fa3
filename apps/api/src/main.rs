use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use shared_config::AppConfig;
use shared_store::{FileRepository, MemoryRepository, Repository};

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AyurMitra portal API server");

    // Load configuration
    let config = Arc::new(AppConfig::from_env());

    // The portal store backs profiles, appointments and the admin session.
    // Without a configured path it lives in memory only.
    let repo: Arc<dyn Repository> = if config.store_path.is_empty() {
        warn!("PORTAL_STORE_PATH not set, using in-memory store");
        Arc::new(MemoryRepository::new())
    } else {
        match FileRepository::open(&config.store_path) {
            Ok(file_repo) => Arc::new(file_repo),
            Err(err) => {
                warn!(
                    "Failed to open store at {}: {}. Falling back to memory",
                    config.store_path, err
                );
                Arc::new(MemoryRepository::new())
            }
        }
    };

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(config, repo)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
