use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The three user-visible fault kinds, plus a fallback for unexpected
/// database errors. Every variant renders the same JSON envelope.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest,
    Unprocessable,
    Database(sqlx::Error),
}

pub type JsonResult<T> = Result<Json<T>, ApiError>;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    /// Classifies a failed mutation: the root cause is logged server-side,
    /// the caller only sees 422.
    pub fn mutation(error: anyhow::Error) -> Self {
        tracing::error!(%error, "mutation failed");
        ApiError::Unprocessable
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Resource Not Found"),
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request"),
            ApiError::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable"),
            ApiError::Database(error) => {
                tracing::error!(%error, "database failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Database(error)
    }
}
