//! HTTP error mapping.
//!
//! Every handler returns [`AppResult`]. Failures render as
//! `{"error": "<message>", "code": "<CODE>"}` with a matching status.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dvdrental_core::error::CoreError;
use dvdrental_db::lifecycle::LifecycleError;
use serde::Serialize;

/// Message sent in place of any 5xx detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Unique constraints whose violation is a client conflict, with the
/// message reported for each. Other `uq_*` constraints get a generic one.
const CONFLICT_CONSTRAINTS: &[(&str, &str)] = &[
    (
        "uq_rentals_active_inventory",
        "Inventory copy already has an active rental",
    ),
    ("uq_payments_rental_id", "Rental already has a payment"),
    ("uq_staff_username", "Staff username is already taken"),
];

/// Errors a handler can return.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request shape is fine but a value cannot be used.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::Core(core) => Self::Core(core),
            LifecycleError::Database(db) => Self::Database(db),
        }
    }
}

/// A body the `Json` extractor could not accept (bad syntax, wrong content
/// type, missing or mistyped fields) is a validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Core(CoreError::Validation(rejection.body_text()))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

/// Status, code and client-facing message of one failure.
struct Rendered {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Rendered {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Log the real cause and hide it from the client.
    fn internal(cause: &dyn std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Request failed with an internal error");
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            INTERNAL_MESSAGE,
        )
    }
}

impl AppError {
    fn render(&self) -> Rendered {
        match self {
            AppError::Core(CoreError::NotFound { entity, id }) => Rendered::new(
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                Rendered::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.as_str())
            }
            AppError::Core(CoreError::Conflict(msg)) => {
                Rendered::new(StatusCode::CONFLICT, "CONFLICT", msg.as_str())
            }
            AppError::Core(CoreError::Internal(msg)) => Rendered::internal(msg),
            AppError::Database(err) => render_sqlx_error(err),
            AppError::BadRequest(msg) => {
                Rendered::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.as_str())
            }
            AppError::InternalError(msg) => Rendered::internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let Rendered {
            status,
            code,
            message,
        } = self.render();
        (
            status,
            Json(ErrorBody {
                error: message,
                code,
            }),
        )
            .into_response()
    }
}

/// Map sqlx failures: a missing row is 404, a `uq_*` unique violation is
/// 409, anything else is a sanitized 500.
fn render_sqlx_error(err: &sqlx::Error) -> Rendered {
    match err {
        sqlx::Error::RowNotFound => {
            Rendered::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found")
        }
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            match db_err.constraint().filter(|name| name.starts_with("uq_")) {
                Some(constraint) => {
                    Rendered::new(StatusCode::CONFLICT, "CONFLICT", conflict_message(constraint))
                }
                None => Rendered::internal(db_err),
            }
        }
        other => Rendered::internal(other),
    }
}

fn conflict_message(constraint: &str) -> String {
    CONFLICT_CONSTRAINTS
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| format!("Duplicate value violates unique constraint: {constraint}"))
}
