use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lazy_static::lazy_static;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

lazy_static! {
    /// Internal error details are echoed to clients only outside production.
    static ref DEV_MODE: bool = std::env::var("APP_ENV")
        .map(|v| v != "production")
        .unwrap_or(true);
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Aggregated field messages; always reported together, never first-fail.
    #[error("validation failed")]
    Validation(Vec<String>),

    #[error("{0}")]
    Conflict(String),

    /// No credential presented.
    #[error("{0}")]
    Unauthorized(String),

    /// Credential presented but rejected, or ownership violated.
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Profile incomplete; gates post creation.
    #[error("{0}")]
    PreconditionFailed(String),

    #[error("{message}")]
    Internal {
        message: String,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn internal(message: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message: message.into(),
            cause: cause.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PreconditionFailed(_) => StatusCode::PRECONDITION_FAILED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal {
            message: "Internal server error".into(),
            cause: err,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, errors, detail) = match self {
            ApiError::Validation(errors) => (errors.join(", "), Some(errors), None),
            ApiError::Conflict(m)
            | ApiError::Unauthorized(m)
            | ApiError::Forbidden(m)
            | ApiError::NotFound(m)
            | ApiError::PreconditionFailed(m) => (m, None, None),
            ApiError::Internal { message, cause } => {
                error!(error = %cause, "internal error");
                let detail = (*DEV_MODE).then(|| cause.to_string());
                (message, None, detail)
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Validation(vec!["x".into()]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("dup".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Unauthorized("no token".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Forbidden("not yours".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::PreconditionFailed("incomplete".into()).status(),
            StatusCode::PRECONDITION_FAILED
        );
        assert_eq!(
            ApiError::internal("boom", anyhow::anyhow!("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_joins_messages() {
        let err = ApiError::Validation(vec!["a".into(), "b".into()]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
