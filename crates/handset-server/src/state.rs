use std::fmt;
use std::sync::Arc;

use handset_sender::DeviceFactory;
use handset_storage::DeviceStore;

/// Shared application state handed to every handler.
///
/// Holds the process-wide store (from which each request acquires its own
/// handle) and the sender registry. Both are cheap to clone.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    pub factory: Arc<DeviceFactory>,
}

impl<S: DeviceStore> AppState<S> {
    pub fn new(store: S, factory: DeviceFactory) -> Self {
        Self {
            store,
            factory: Arc::new(factory),
        }
    }
}

impl<S> fmt::Debug for AppState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}
