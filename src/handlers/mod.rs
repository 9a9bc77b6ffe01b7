//! HTTP handlers for item CRUD.

pub mod items;
