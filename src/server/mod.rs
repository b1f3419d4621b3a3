//! REST API over the store.
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/equipments` | 200, catalog |
//! | GET | `/loadouts` | 200, saved loadouts |
//! | POST | `/loadouts` | 201, created loadout |
//! | GET | `/loadout/{id}` | 200, loadout |
//! | PATCH | `/loadout/{id}` | 200, updated loadout |
//! | DELETE | `/loadout/{id}` | 200, deleted loadout |
//!
//! Failures answer `{"error": "..."}`. Static images are served under
//! `/assets` when an assets directory is configured.

pub mod error;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config;
use crate::error::Result;
use crate::AsyncArmory;

pub use error::AppError;
pub use state::AppState;

/// Build the application router around a store.
///
/// `assets_dir`, when given, is served under [`config::ASSETS_MOUNT`].
pub fn router(store: AsyncArmory, assets_dir: Option<PathBuf>) -> Router {
    let state = Arc::new(AppState { store });

    let mut app = Router::new()
        .route("/", get(routes::index))
        .route("/equipments", get(routes::equipments::list_equipments))
        .route(
            "/loadouts",
            get(routes::loadouts::list_loadouts).post(routes::loadouts::create_loadout),
        )
        .route(
            "/loadout/{id}",
            get(routes::loadouts::get_loadout)
                .patch(routes::loadouts::update_loadout)
                .delete(routes::loadouts::delete_loadout),
        );

    if let Some(dir) = assets_dir {
        tracing::info!(dir = %dir.display(), mount = config::ASSETS_MOUNT, "serving assets");
        app = app.nest_service(config::ASSETS_MOUNT, ServeDir::new(dir));
    }

    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve `app` until the process is stopped.
pub async fn serve(addr: SocketAddr, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "server is listening");
    axum::serve(listener, app).await?;
    Ok(())
}
