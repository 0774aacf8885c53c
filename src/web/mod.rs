//! JSON HTTP API over a [`Gallery`].
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /health` | liveness, plain `ok` |
//! | `GET /api/images?visitor=<id>` | listing with the visitor's star state |
//! | `POST /api/star` | toggle a star |
//! | `GET /thumbs/:filename` | thumbnail bytes, generated on first request |
//! | `GET /images/:filename` | original bytes |
//!
//! No HTML is rendered. Handlers are thin: each one hands its work to the
//! gallery on Tokio's blocking pool, since every gallery call touches the
//! filesystem and thumbnail generation is CPU-bound.

pub mod handlers;

use crate::gallery::Gallery;
use axum::Router;
use axum::routing::{get, post};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::ApiError;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub gallery: Arc<Gallery>,
}

/// Build the router with all routes and middleware.
pub fn router(gallery: Gallery) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/images", get(handlers::list_images))
        .route("/api/star", post(handlers::toggle_star))
        .route("/thumbs/:filename", get(handlers::thumbnail))
        .route("/images/:filename", get(handlers::original))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState {
            gallery: Arc::new(gallery),
        })
}

/// Serve the API on `addr` until Ctrl-C.
pub async fn serve(gallery: Gallery, addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(gallery))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("shutting down");
}
