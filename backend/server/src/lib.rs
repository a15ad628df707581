//! Recipe book REST service.
//!
//!
//!
//! # General Infrastructure
//! - Browser or CLI client talks JSON to this server
//! - Server is stateless apart from one store handle built at startup and shared by every request
//! - Store is Redis in deployments, an in-memory vector for local runs and tests
//! - Cross-origin requests are accepted from exactly one configured origin
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | POST | `/api/foods` | 201 record | 400 invalid body |
//! | GET | `/api/foods` | 200 records | |
//! | GET | `/api/foods/search?name=` | 200 matches | 404 `No foods found` |
//! | GET | `/api/foods/{id}` | 200 record | 404 `Food not found` |
//! | PUT | `/api/foods/{id}` | 200 updated record | 400, 404 |
//! | DELETE | `/api/foods/{id}` | 200 `{message, deletedFood}` | 404 |
//!
//! Any store fault is a 500 with `{"message": "Server error"}`, the detail only goes to the log.
//!
//! `/api/foods/search` and `/api/foods/{id}` overlap. The router always prefers the static
//! segment, so `search` is never taken as an id.
//!
//!
//!
//! # Setup
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `3001` |
//! | `CORS_ORIGIN` | `http://localhost:3000` |
//! | `STORE_BACKEND` | `redis` (or `memory`) |
//! | `REDIS_URL` | env, then `/run/secrets/REDIS_URL`, then `redis://127.0.0.1:6379` |
//!
//! Run against a local Redis.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Run without Redis.
//! ```sh
//! STORE_BACKEND=memory RUST_LOG=info cargo run
//! ```
//!
//! Redis tests are ignored by default.
//! ```sh
//! REDIS_URL=redis://127.0.0.1:6379 cargo test -p server -- --ignored
//! ```
use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod memory;
pub mod routes;
pub mod search;
pub mod state;
pub mod store;
pub mod utils;

use config::Config;
use routes::{
    create_handler, delete_handler, get_handler, list_handler, search_handler, update_handler,
};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config)
        .await
        .context("Failed to initialize store")?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");

    Ok(())
}

/// Routes only. Literal `/search` wins over the `{id}` capture.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/foods", get(list_handler).post(create_handler))
        .route("/api/foods/search", get(search_handler))
        .route(
            "/api/foods/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

/// Full service: routes, CORS for the configured origin, shared state.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([state.config.allowed_origin.clone()]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    router().layer(cors).with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;

                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
