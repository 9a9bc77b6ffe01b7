//! Item CRUD against SQLite through a session.

use crate::error::AppError;
use crate::model::{Item, ITEM_COLUMNS};
use crate::schema::{ItemCreate, ItemUpdate};
use crate::store::Session;
use chrono::Utc;

pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 1000;

pub struct ItemService;

impl ItemService {
    /// List items in insertion order. `skip` defaults to 0, `limit` to 100 (max 1000).
    pub async fn list(
        session: &mut Session,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Item>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let skip = skip.unwrap_or(0);
        let sql = format!("SELECT {} FROM items ORDER BY id LIMIT ? OFFSET ?", ITEM_COLUMNS);
        tracing::debug!(sql = %sql, limit, skip, "query");
        let rows = sqlx::query(&sql)
            .bind(i64::from(limit))
            .bind(i64::from(skip))
            .fetch_all(session.conn())
            .await?;
        let items = rows.iter().map(Item::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Fetch one item by id. `None` when no such item exists.
    pub async fn get(session: &mut Session, id: i64) -> Result<Option<Item>, AppError> {
        let sql = format!("SELECT {} FROM items WHERE id = ?", ITEM_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(session.conn()).await?;
        Ok(row.as_ref().map(Item::from_row).transpose()?)
    }

    /// Insert one item. Both timestamps are set to the same instant.
    pub async fn create(session: &mut Session, fields: &ItemCreate) -> Result<Item, AppError> {
        let now = Utc::now();
        let sql = format!(
            "INSERT INTO items (title, description, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING {}",
            ITEM_COLUMNS
        );
        tracing::debug!(sql = %sql, title = %fields.title, "query");
        let row = sqlx::query(&sql)
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(now)
            .bind(now)
            .fetch_one(session.conn())
            .await?;
        let item = Item::from_row(&row)?;
        tracing::info!(id = item.id, "item created");
        Ok(item)
    }

    /// Overwrite title and description of an existing item. `updated_at` never moves
    /// backwards. `None` when no such item exists.
    pub async fn update(
        session: &mut Session,
        id: i64,
        fields: &ItemUpdate,
    ) -> Result<Option<Item>, AppError> {
        let Some(existing) = Self::get(session, id).await? else {
            return Ok(None);
        };
        let updated_at = Utc::now().max(existing.updated_at);

        let sql = format!(
            "UPDATE items SET title = ?, description = ?, updated_at = ? WHERE id = ? RETURNING {}",
            ITEM_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(session.conn())
            .await?;
        let item = row.as_ref().map(Item::from_row).transpose()?;
        if item.is_some() {
            tracing::info!(id, "item updated");
        }
        Ok(item)
    }

    /// Delete one item. Returns `false` when no such item exists.
    pub async fn delete(session: &mut Session, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM items WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(session.conn()).await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "item deleted");
        }
        Ok(deleted)
    }
}
