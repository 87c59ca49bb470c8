//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::{ErrorBody, StatusBody};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("duplicate path segment: {0}")]
    DuplicatePathSegment(String),
    #[error("resource '{resource}' declares field '{field}' more than once")]
    DuplicateField { resource: String, field: String },
    #[error("resource '{0}' may not declare '_id' as a writable field")]
    IdentifierField(String),
    #[error("unknown domain preset: {0}")]
    UnknownPreset(String),
    #[error("invalid setting {name}: {message}")]
    Setting { name: &'static str, message: String },
    #[error("config load: {0}")]
    Load(String),
    #[error("validation: {0}")]
    Validation(String),
}

/// Failures of a single gateway or store call.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No object with id {0}")]
    NotFound(String),
    #[error("invalid identifier '{id}': {source}")]
    InvalidIdentifier {
        id: String,
        #[source]
        source: bson::oid::Error,
    },
    #[error("document store unavailable: {0}")]
    StoreUnavailable(String),
    #[error(transparent)]
    Driver(mongodb::error::Error),
    #[error("stored document in '{0}' has no ObjectId identifier")]
    MalformedDocument(String),
    #[error("invalid update: {0}")]
    InvalidUpdate(String),
    #[error("encode document: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

impl From<mongodb::error::Error> for GatewayError {
    fn from(e: mongodb::error::Error) -> Self {
        if let mongodb::error::ErrorKind::ServerSelection { message, .. } = e.kind.as_ref() {
            return GatewayError::StoreUnavailable(message.clone());
        }
        GatewayError::Driver(e)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// Missing document; the message is sent back as the `status` field.
    #[error("{0}")]
    NotFound(String),
    #[error("unknown resource: {0}")]
    UnknownResource(String),
    #[error("{operation} is not supported on {resource}")]
    MethodNotAllowed {
        operation: &'static str,
        resource: String,
    },
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) | AppError::Gateway(GatewayError::NotFound(_)) => {
                let body = StatusBody {
                    status: self.to_string(),
                };
                return (StatusCode::NOT_FOUND, Json(body)).into_response();
            }
            AppError::UnknownResource(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::debug!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
