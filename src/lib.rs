//! Items API: record-management REST backend for a single `items` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::Item;
pub use openapi::api_doc;
pub use routes::{app, common_routes, cors_layer, item_routes};
pub use service::ItemService;
pub use state::AppState;
pub use store::{Session, Store};
