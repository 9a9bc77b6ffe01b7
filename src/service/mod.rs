//! ItemService: item CRUD over a session, plus request validation.

mod crud;
pub mod validation;
pub use crud::{ItemService, DEFAULT_LIMIT, MAX_LIMIT};
pub use validation::{RequestValidator, Validate};
