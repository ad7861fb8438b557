/*
 * Responsibility
 * - the application-wide AppError
 * - IntoResponse (HTTP status / JSON error body)
 * - fold repo / auth / id codec / body rejection errors into one type
 */
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::auth::AuthError;
use crate::services::id_codec::IdCodecError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    /// A body rejection that keeps the status axum chose for it (415, 413, ..).
    #[error("{status} {code}: {message}")]
    Rejected {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
    #[error("validation failed: {message}")]
    Validation { message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    /// No credential, or a credential that resolves to nobody.
    #[error("unauthenticated")]
    Unauthenticated,
    /// Valid identity, but not the owner of the resource.
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::Rejected {
                status,
                code,
                message,
            } => (status, code, message),
            AppError::Validation { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
            }
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{resource} not found."),
            ),
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "missing or invalid credential".into(),
            ),
            // Surfaced with the same status as Unauthenticated; the code tells them apart.
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "NOT_OWNER",
                "resource is owned by another user".into(),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Invalid(message) => AppError::validation(message),
            RepoError::Db(err) => {
                tracing::error!(error = ?err, "database error");
                AppError::Internal
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Lookup(err) => {
                tracing::error!(error = ?err, "credential lookup failed");
                AppError::Internal
            }
            other => {
                tracing::debug!(reason = %other, "authentication rejected");
                AppError::Unauthenticated
            }
        }
    }
}

impl From<IdCodecError> for AppError {
    fn from(e: IdCodecError) -> Self {
        match e {
            // Client supplied a malformed public id (e.g. /lists/{id})
            IdCodecError::DecodeInvalidFormat | IdCodecError::DecodeOutOfRange => {
                AppError::bad_request("INVALID_PUBLIC_ID", "invalid id")
            }

            // Server-side config / programming errors
            IdCodecError::InvalidMinLength { .. }
            | IdCodecError::Sqids(_)
            | IdCodecError::NegativeId { .. } => {
                tracing::error!(error = %e, "id codec failure");
                AppError::Internal
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON whose shape or field types don't fit the DTO
            JsonRejection::JsonDataError(err) => AppError::validation(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                AppError::bad_request("INVALID_JSON", err.body_text())
            }
            JsonRejection::MissingJsonContentType(err) => AppError::Rejected {
                status: err.status(),
                code: "UNSUPPORTED_MEDIA_TYPE",
                message: err.body_text(),
            },
            other => {
                let status = other.status();
                let code = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
                    StatusCode::BAD_REQUEST => "INVALID_BODY",
                    _ => "BODY_REJECTED",
                };
                AppError::Rejected {
                    status,
                    code,
                    message: other.body_text(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_maps_to_one_status() {
        let cases = [
            (AppError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
            (AppError::not_found("list"), StatusCode::NOT_FOUND),
            (
                AppError::validation("title is required"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::bad_request("INVALID_PUBLIC_ID", "invalid id"),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Rejected {
                    status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    code: "UNSUPPORTED_MEDIA_TYPE",
                    message: "expected application/json".into(),
                },
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (AppError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn repo_validation_becomes_unprocessable() {
        let err: AppError = RepoError::Invalid("title too long".into()).into();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn malformed_public_id_is_a_bad_request() {
        let err: AppError = IdCodecError::DecodeInvalidFormat.into();
        assert!(matches!(
            err,
            AppError::BadRequest {
                code: "INVALID_PUBLIC_ID",
                ..
            }
        ));
    }
}
