//! Request extractors: validated JSON bodies.

mod json;

pub use json::ValidJson;
