//! HTTP surface for the Handset device registry
//!
//! This crate wires the registry onto axum: device CRUD, the SMS action that
//! dispatches on the device's operating system, and the middleware that gives
//! every request its own store session.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | POST | `/device/sms/{device_id}/` | [`handlers::send_sms`] |
//! | GET | `/device/{device_id}/` | [`handlers::get_device`] |
//! | POST | `/device/new/` | [`handlers::create_device`] |
//! | GET, PUT, DELETE | `/device/new/` | [`handlers::reserved_id`] |
//! | PUT | `/device/{device_id}/` | [`handlers::update_device`] |
//! | DELETE | `/device/{device_id}/` | [`handlers::delete_device`] |
//! | GET | `/devices` | [`handlers::list_devices`] |
//! | GET | `/health` | [`handlers::health`] |
//!
//! # Example
//!
//! ```no_run
//! use handset_sender::DeviceFactory;
//! use handset_server::{AppState, router};
//! use handset_storage::{Database, DatabaseConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let database = Database::new(DatabaseConfig::default())?;
//! let app = router(AppState::new(database, DeviceFactory::default()));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8090").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod session;
pub mod state;

pub use config::{Cli, ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use handset_storage::DeviceStore;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// Device routes run behind the session-scoping middleware; `/health` does
/// not touch the store.
pub fn router<S: DeviceStore>(state: AppState<S>) -> Router {
    let devices = Router::new()
        .route("/device/sms/{device_id}/", post(handlers::send_sms::<S>))
        .route(
            "/device/new/",
            post(handlers::create_device::<S>)
                .get(handlers::reserved_id)
                .put(handlers::reserved_id)
                .delete(handlers::reserved_id),
        )
        .route(
            "/device/{device_id}/",
            get(handlers::get_device::<S>)
                .put(handlers::update_device::<S>)
                .delete(handlers::delete_device::<S>),
        )
        .route("/devices", get(handlers::list_devices::<S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::scope_store_session::<S>,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(devices)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
