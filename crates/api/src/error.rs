use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use canteen_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a sqlx passthrough for
/// read-path faults. Implements [`IntoResponse`] to produce the legacy
/// `{"success": false, "error": <code>, "message": <text>}` envelope with
/// its literal message strings.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `canteen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx on a read path.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 404 with the legacy "resource not found" body.
    pub fn not_found(detail: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound(detail.into()))
    }

    /// 422 with the legacy "unprocessable" body.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        AppError::Core(CoreError::Unprocessable(detail.into()))
    }

    /// Store faults on create/update/delete paths surface as 422, matching
    /// the legacy contract; the underlying fault goes to the log only.
    pub fn write_failure(err: sqlx::Error) -> Self {
        tracing::error!(error = %err, "Store write failed");
        AppError::Core(CoreError::Unprocessable("store write failed".into()))
    }
}

/// A body axum cannot extract (malformed JSON, wrong content type, missing
/// body) is a malformed request and answers with the 422 envelope.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::unprocessable(format!("invalid request body: {rejection}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound(detail) => {
                    tracing::debug!(detail = %detail, "Resource not found");
                    (StatusCode::NOT_FOUND, MSG_NOT_FOUND.to_string())
                }
                CoreError::Unprocessable(detail) => {
                    tracing::debug!(detail = %detail, "Unprocessable request");
                    (StatusCode::UNPROCESSABLE_ENTITY, MSG_UNPROCESSABLE.to_string())
                }
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
            }
        };

        error_response(status, &message)
    }
}

/// Legacy message strings. Status-coded messages are part of the documented
/// contract and must not change.
pub const MSG_NOT_FOUND: &str = "resource not found";
pub const MSG_UNPROCESSABLE: &str = "unprocessable";
pub const MSG_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const MSG_INTERNAL: &str = "internal server error";

/// Build the uniform failure envelope for a status code and message.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
    });
    (status, axum::Json(body)).into_response()
}
