use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::datamodel::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("ISBN already exists")]
    DuplicateIsbn,

    #[error("Error adding book: {0}")]
    Invalid(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejecting request");
        let body = ErrorBody {
            error: Some(self.to_string()),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
