use crate::db::StoreError;
use crate::export::UnsupportedFormat;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid voting submission")]
    InvalidVote,

    #[error("Unsupported file type")]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Internal error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidVote | AppError::UnsupportedFormat(_) | AppError::MalformedPayload => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(e) => {
                error!("Store failure: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
