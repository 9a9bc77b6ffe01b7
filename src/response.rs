//! Response helpers. Bodies are bare JSON values, no envelope.

use crate::schema::MessageBody;
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn success_message(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}
