//! Request and response bodies for the item endpoints.

use crate::error::AppError;
use crate::service::validation::{FieldRule, RequestValidator, Validate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use crate::model::Item;

pub const TITLE_RULE: FieldRule = FieldRule {
    min_length: Some(1),
    max_length: Some(100),
};

pub const DESCRIPTION_RULE: FieldRule = FieldRule {
    min_length: None,
    max_length: Some(500),
};

/// Body of `POST /api/items`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ItemCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /api/items/{id}`. Replaces both fields; a missing description becomes empty.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ItemUpdate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl Validate for ItemCreate {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::validate_field("title", &self.title, &TITLE_RULE)?;
        RequestValidator::validate_field("description", &self.description, &DESCRIPTION_RULE)
    }
}

impl Validate for ItemUpdate {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::validate_field("title", &self.title, &TITLE_RULE)?;
        RequestValidator::validate_field("description", &self.description, &DESCRIPTION_RULE)
    }
}
