use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Handler failure. Body rejections, timestamp parse failures and store
/// errors all map to 500 with `{"error": message}`.
#[derive(Debug)]
pub struct ApiError(pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        error!(error = %msg, "request failed");
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self { Self(e.body_text()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn every_error_is_internal_server_error() {
        let errs = [
            ApiError::from(ServiceError::Db("disk I/O error".into())),
            ApiError::from(ServiceError::from(ModelError::Validation("invalid deadline".into()))),
            ApiError("bad body".into()),
        ];
        for e in errs {
            assert_eq!(e.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn model_errors_keep_their_message() {
        let e = ApiError::from(ServiceError::from(ModelError::Validation("invalid deadline 'x'".into())));
        assert_eq!(e.0, "validation error: invalid deadline 'x'");
    }
}
