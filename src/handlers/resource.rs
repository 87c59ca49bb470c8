//! Resource handlers: welcome, list, create, read, update, delete.

use crate::config::{Operation, ResolvedResource};
use crate::error::{AppError, GatewayError};
use crate::extractors::JsonBody;
use crate::response::{created, document, documents, status_ok};
use crate::service::CollectionGateway;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::{Map, Value};

/// Look up the resource behind `path_segment` and check it exposes `operation`.
fn resource_for<'a>(
    state: &'a AppState,
    path_segment: &str,
    operation: Operation,
) -> Result<&'a ResolvedResource, AppError> {
    let resource = state
        .model
        .resource_by_path(path_segment)
        .ok_or_else(|| AppError::UnknownResource(path_segment.to_string()))?;
    if !resource.allows(operation) {
        return Err(AppError::MethodNotAllowed {
            operation: operation.as_str(),
            resource: path_segment.to_string(),
        });
    }
    Ok(resource)
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn gateway_error(state: &AppState, e: GatewayError) -> AppError {
    match e {
        e @ GatewayError::InvalidIdentifier { .. } if state.strict_ids => AppError::BadRequest(e.to_string()),
        other => AppError::Gateway(other),
    }
}

pub async fn welcome(State(state): State<AppState>) -> String {
    state.model.welcome.clone()
}

pub async fn list(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resource_for(&state, &path_segment, Operation::List)?;
    let docs = CollectionGateway::new(state.store.as_ref(), resource)
        .list_all()
        .await
        .map_err(|e| gateway_error(&state, e))?;
    Ok(documents(docs))
}

pub async fn create(
    State(state): State<AppState>,
    Path(path_segment): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let resource = resource_for(&state, &path_segment, Operation::Create)?;
    let body = body_to_map(body)?;
    let id = CollectionGateway::new(state.store.as_ref(), resource)
        .create(&body)
        .await
        .map_err(|e| gateway_error(&state, e))?;
    tracing::debug!(resource = %path_segment, %id, "created");
    Ok(created(id.to_hex()))
}

pub async fn read(
    State(state): State<AppState>,
    Path((path_segment, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resource_for(&state, &path_segment, Operation::Read)?;
    let doc = CollectionGateway::new(state.store.as_ref(), resource)
        .get_by_id(&id)
        .await
        .map_err(|e| gateway_error(&state, e))?;
    Ok(document(doc))
}

pub async fn update(
    State(state): State<AppState>,
    Path((path_segment, id)): Path<(String, String)>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let resource = resource_for(&state, &path_segment, Operation::Update)?;
    let body = body_to_map(body)?;
    match CollectionGateway::new(state.store.as_ref(), resource)
        .update_by_id(&id, body)
        .await
    {
        Ok(_) => Ok(status_ok(format!("{} with id {} has been updated.", resource.label, id))),
        Err(GatewayError::NotFound(_)) => Err(AppError::NotFound(format!(
            "No {} with id {}",
            resource.label.to_lowercase(),
            id
        ))),
        Err(e) => Err(gateway_error(&state, e)),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path((path_segment, id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let resource = resource_for(&state, &path_segment, Operation::Delete)?;
    CollectionGateway::new(state.store.as_ref(), resource)
        .delete_by_id(&id)
        .await
        .map_err(|e| gateway_error(&state, e))?;
    Ok(status_ok(format!("Object with id {} has been successfully deleted.", id)))
}
