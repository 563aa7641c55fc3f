use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Data(#[from] market_data::DataError),

    #[error("unknown model {0:?}")]
    UnknownModel(String),

    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Data(_) | ApiError::UnknownModel(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) | ApiError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}
