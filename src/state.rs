//! Shared application state for all routes. Built once at startup and handed to the router.

use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState { store }
    }
}
