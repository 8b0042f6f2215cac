use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the database error from
/// sqlx. Implements [`IntoResponse`] to produce the API's error responses:
///
/// - not-found is a bare 404 with an empty body;
/// - validation failures are 422 with the raw `field -> [messages]` map;
/// - everything else is `{ "error": ..., "code": ... }` JSON.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                // 404s carry no body at all.
                CoreError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),

                // The 422 body IS the field-keyed error map, unwrapped.
                CoreError::Validation(errors) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(errors)).into_response()
                }

                CoreError::Conflict(msg) => json_error(StatusCode::CONFLICT, "CONFLICT", &msg),

                CoreError::AmbiguousName(name) => json_error(
                    StatusCode::CONFLICT,
                    "AMBIGUOUS_NAME",
                    &format!("More than one character is named '{name}'; look up by id instead"),
                ),

                CoreError::MalformedKey(segment) => json_error(
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_KEY",
                    &format!("'{segment}' is not a valid integer id"),
                ),

                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    json_error(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred",
                    )
                }
            },

            AppError::Database(err) => classify_sqlx_error(&err),
        }
    }
}

fn json_error(status: StatusCode, code: &'static str, message: &str) -> Response {
    let body = json!({
        "error": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}

/// Classify a sqlx error into an HTTP response.
///
/// - Unique violations map to 409: a create targeted an id that already
///   exists, and the constraint rejected it (the existing row is untouched).
/// - `RowNotFound` maps to a bare 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND.into_response(),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => json_error(
            StatusCode::CONFLICT,
            "CONFLICT",
            "A character with this id already exists",
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred",
            )
        }
    }
}
