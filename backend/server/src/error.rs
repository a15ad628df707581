use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bank::{
    Message, ValidationError,
    payloads::{MALFORMED_PAYLOAD, SERVER_ERROR},
};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MalformedPayload => (StatusCode::BAD_REQUEST, MALFORMED_PAYLOAD.to_string()),
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.to_string()),
            AppError::Store(e) => {
                error!("{e}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
            }
        };

        (status, Json(Message::new(message))).into_response()
    }
}
