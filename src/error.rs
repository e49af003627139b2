use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::model::simple_response::ErrorDetail;

/// Rejections produced by the activity and todo stores.
///
/// The display string doubles as the `detail` field returned to the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Todo not found")]
    TodoNotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    ActivityFull,
}

impl StoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::ActivityNotFound | StoreError::TodoNotFound => StatusCode::NOT_FOUND,
            StoreError::AlreadyRegistered
            | StoreError::NotRegistered
            | StoreError::ActivityFull => StatusCode::BAD_REQUEST,
        }
    }
}

/// Every way a request can fail, rendered as `{"detail": ...}`.
///
/// Extractor rejections keep axum's status code (400 for query and path, 422 for
/// a body of the wrong shape) but trade its plain-text body for JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(e) => e.status_code(),
            ApiError::Json(e) => e.status(),
            ApiError::Query(e) => e.status(),
            ApiError::Path(e) => e.status(),
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Store(e) => e.to_string(),
            ApiError::Json(e) => e.body_text(),
            ApiError::Query(e) => e.body_text(),
            ApiError::Path(e) => e.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorDetail::new(self.detail());
        (self.status_code(), Json(body)).into_response()
    }
}

/// Anything that can stop the server from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Could not parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {message}")]
    Invalid { field: String, message: String },

    #[error("Could not load TLS certificate: {0}")]
    Tls(std::io::Error),

    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
