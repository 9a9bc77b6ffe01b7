//! Item CRUD routes.

use crate::handlers::items::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list).post(create))
        .route("/items/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
