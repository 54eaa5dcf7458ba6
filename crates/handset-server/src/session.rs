//! Request-scoped store sessions.
//!
//! Every device route runs behind [`scope_store_session`], which acquires a
//! fresh handle from the shared store before the handler runs, attaches it to
//! the request extensions, and drops it once the response has been produced.
//! Handlers pick the handle up with the [`StoreHandle`] extension type.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use handset_storage::DeviceStore;
use tracing::trace;

use crate::error::ApiError;
use crate::state::AppState;

/// Handle type placed in request extensions for store `S`.
pub type StoreHandle<S> = Arc<<S as DeviceStore>::Handle>;

/// Middleware that scopes one store handle to one request.
///
/// If acquisition fails the request is answered with a 500 and no handler
/// runs.
pub async fn scope_store_session<S: DeviceStore>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Response {
    let handle: StoreHandle<S> = match state.store.acquire().await {
        Ok(handle) => Arc::new(handle),
        Err(e) => return ApiError::from(e).into_response(),
    };

    trace!(path = %request.uri().path(), "Acquired store session");
    request.extensions_mut().insert(handle.clone());

    let response = next.run(request).await;

    drop(handle);
    trace!("Released store session");
    response
}
