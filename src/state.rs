//! Shared application state for all routes.

use crate::store::Store;

/// The store handle is the only resource shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}
