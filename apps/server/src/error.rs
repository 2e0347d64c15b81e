use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use proreview_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    /// Any backend failure maps to 502, a missing table included.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Backend(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status.is_server_error() {
            tracing::error!("{}", msg);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: msg,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use proreview_core::errors::{BackendError, ValidationError};

    fn status_of(err: CoreError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_backend_errors_map_to_bad_gateway() {
        assert_eq!(
            status_of(BackendError::NotFound("relation \"profiles\" does not exist".into()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(BackendError::Unauthorized("Invalid API key".into()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(BackendError::RequestFailed("connection refused".into()).into()),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        assert_eq!(
            status_of(ValidationError::InvalidInput("limit".into()).into()),
            StatusCode::BAD_REQUEST
        );
    }
}
