//! Item CRUD handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::ValidJson;
use crate::response::{success_many, success_message, success_one};
use crate::schema::{Item, ItemCreate, ItemUpdate, MessageBody};
use crate::service::ItemService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid item id '{}'", id_str)))
}

fn parse_u32_param(params: &HashMap<String, String>, name: &str) -> Result<Option<u32>, AppError> {
    params
        .get(name)
        .map(|v| {
            v.parse::<u32>().map_err(|_| {
                AppError::Validation(format!("{} must be a non-negative integer", name))
            })
        })
        .transpose()
}

#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    params(
        ("skip" = Option<u32>, Query, description = "Number of items to skip (default 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum number of items to return (default 100)"),
    ),
    responses(
        (status = 200, description = "Items in insertion order", body = Vec<Item>),
        (status = 422, description = "Invalid query parameter", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let skip = parse_u32_param(&params, "skip")?;
    let limit = parse_u32_param(&params, "limit")?;
    let mut session = state.store.open_session().await?;
    let items = ItemService::list(&mut session, skip, limit).await?;
    session.close();
    Ok(success_many(items))
}

#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = ItemCreate,
    responses(
        (status = 200, description = "Created item", body = Item),
        (status = 422, description = "Invalid body", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<ItemCreate>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = state.store.open_session().await?;
    let item = ItemService::create(&mut session, &body).await?;
    session.close();
    Ok(success_one(item))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No such item", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut session = state.store.open_session().await?;
    let item = ItemService::get(&mut session, id)
        .await?
        .ok_or_else(AppError::item_not_found)?;
    session.close();
    Ok(success_one(item))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 404, description = "No such item", body = ErrorBody),
        (status = 422, description = "Invalid body", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ValidJson(body): ValidJson<ItemUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut session = state.store.open_session().await?;
    let item = ItemService::update(&mut session, id, &body)
        .await?
        .ok_or_else(AppError::item_not_found)?;
    session.close();
    Ok(success_one(item))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = MessageBody),
        (status = 404, description = "No such item", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let mut session = state.store.open_session().await?;
    if !ItemService::delete(&mut session, id).await? {
        return Err(AppError::item_not_found());
    }
    session.close();
    Ok(success_message("Item deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert!(matches!(parse_id("seven"), Err(AppError::Validation(_))));
    }

    #[test]
    fn query_params_must_be_non_negative_integers() {
        let mut params = HashMap::new();
        assert_eq!(parse_u32_param(&params, "skip").unwrap(), None);

        params.insert("skip".to_string(), "5".to_string());
        assert_eq!(parse_u32_param(&params, "skip").unwrap(), Some(5));

        params.insert("limit".to_string(), "-1".to_string());
        assert!(matches!(parse_u32_param(&params, "limit"), Err(AppError::Validation(_))));
    }
}
