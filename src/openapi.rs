//! OpenAPI document served at `/openapi.json`.

use crate::config::{API_TITLE, API_VERSION};
use crate::error::ErrorBody;
use crate::handlers::items;
use crate::routes::common;
use crate::schema::{Item, ItemCreate, ItemUpdate, MessageBody};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        items::list,
        items::create,
        items::read,
        items::update,
        items::delete,
        common::health,
        common::ready,
        common::version,
    ),
    components(schemas(Item, ItemCreate, ItemUpdate, MessageBody, ErrorBody)),
    tags(
        (name = "items", description = "Item CRUD"),
        (name = "common", description = "Health and service metadata"),
    )
)]
pub struct ApiDoc;

pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = API_TITLE.to_string();
    doc.info.version = API_VERSION.to_string();
    doc
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
