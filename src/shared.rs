use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Datelike;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::store::repository::Datastore;
use crate::tags::TagError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub datastore: Arc<dyn Datastore>,
}

impl AppState {
    pub fn new(datastore: Arc<dyn Datastore>) -> Self {
        Self { datastore }
    }
}

/// The year scouting queries default to when none is given.
pub(crate) fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("datastore error: {0}")]
    Datastore(String),

    #[error("internal server error")]
    Internal,
}

impl From<TagError> for AppError {
    fn from(err: TagError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Datastore(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("datastore error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
