//! # itemreg-server
//!
//! REST service and embedded web UI for the itemreg item registry.
//!
//! Serves a single-page form/list UI and a small JSON API over any
//! [`ItemStore`] backend. The store is constructed by the caller and handed
//! in, so tests run the full HTTP surface against an in-memory backend.
//!
//! ## Quick Start
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() {
//!     itemreg_server::start("items.db", 3000).await.unwrap();
//! }
//! ```

mod api;

use std::sync::{Arc, Mutex};

use axum::{
    routing::{delete, get},
    Router,
};
use itemreg_store::{ItemStore, SqliteStore};

/// Shared application state for Axum handlers.
///
/// The store is behind a `Mutex`: each handler holds the lock for one
/// driver call and nothing longer. The backend imposes no further ordering
/// across concurrent requests.
pub(crate) struct AppState<S> {
    pub store: Mutex<S>,
}

/// Build the service router over an injected store backend.
///
/// Routes: the embedded UI at `/`, a health probe at `/health`, and the
/// item collection under `/api/items`.
pub fn router<S>(store: S) -> Router
where
    S: ItemStore + Send + 'static,
{
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route(
            "/api/items",
            get(api::list_items::<S>).post(api::create_item::<S>),
        )
        .route("/api/items/:id", delete(api::delete_item::<S>))
        .with_state(state)
}

/// Start the registry web server.
///
/// Opens the SQLite database at `db_path` (creating it and its schema if
/// absent) and serves the UI and API on `0.0.0.0:{port}`. This function
/// blocks until the server is shut down (Ctrl-C).
pub async fn start(db_path: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let store = SqliteStore::open(db_path)?;
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    eprintln!("  itemreg: http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
