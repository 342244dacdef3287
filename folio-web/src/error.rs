use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_service::ContentError;
use serde::Serialize;

/// HTTP层错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Content(#[from] ContentError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Content(e) => match e {
                ContentError::Validation(_) => StatusCode::BAD_REQUEST,
                ContentError::Conflict(_) => StatusCode::CONFLICT,
                ContentError::NotFound(_) => StatusCode::NOT_FOUND,
                ContentError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
                ContentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            Self::Content(ContentError::Store(e)) => {
                tracing::error!(error = %e, "document store error");
                "Document store error".to_string()
            }
            Self::Content(ContentError::Configuration(msg)) => {
                tracing::warn!(reason = %msg, "write rejected");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
