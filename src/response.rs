//! Response bodies and helpers shared by the resource handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;

/// `{"_id": "<hex>"}` returned by a successful create.
#[derive(Serialize)]
pub struct CreatedBody {
    #[serde(rename = "_id")]
    pub id: String,
}

/// `{"status": "..."}` for update/delete confirmations and not-found replies.
#[derive(Serialize)]
pub struct StatusBody {
    pub status: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn created(id: impl Into<String>) -> (StatusCode, Json<CreatedBody>) {
    (StatusCode::CREATED, Json(CreatedBody { id: id.into() }))
}

pub fn status_ok(status: String) -> (StatusCode, Json<StatusBody>) {
    (StatusCode::OK, Json(StatusBody { status }))
}

pub fn document(doc: Value) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(doc))
}

pub fn documents(docs: Vec<Value>) -> (StatusCode, Json<Vec<Value>>) {
    (StatusCode::OK, Json(docs))
}
